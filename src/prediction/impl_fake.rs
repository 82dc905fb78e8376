use crate::frame_capture::CapturedImage;
use crate::library::logger::interface::Logger;
use crate::prediction::interface::{Prediction, PredictionClient, PredictionError};
use rand::Rng;
use std::sync::{Arc, Mutex};

/// The resin classes the remote model was trained on.
const LABELS: [&str; 8] = [
    "1 polyethylene (PET)",
    "2 high density polyethylene (HDPE/PEHD)",
    "3 polyvinyl chloride (PVC)",
    "4 low density polyethylene (LDPE)",
    "5 polypropylene (PP)",
    "6 polystyrene (PS)",
    "7 other resins",
    "8 no plastic",
];

#[allow(dead_code)]
pub struct FakePredictionClient {
    logger: Arc<dyn Logger + Send + Sync>,
    scripted: Mutex<Option<Result<Prediction, PredictionError>>>,
}

#[allow(dead_code)]
impl FakePredictionClient {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("prediction").with_namespace("fake"),
            scripted: Mutex::new(None),
        }
    }

    pub fn with_response(self, response: Result<Prediction, PredictionError>) -> Self {
        *self.scripted.lock().unwrap() = Some(response);
        self
    }
}

impl PredictionClient for FakePredictionClient {
    fn predict(&self, image: &CapturedImage) -> Result<Prediction, PredictionError> {
        let _ = self.logger.info(&format!(
            "Predicting over {} byte image with fake client",
            image.jpeg.len()
        ));

        if let Some(scripted) = self.scripted.lock().unwrap().clone() {
            return scripted;
        }

        let mut rng = rand::rng();
        let label = LABELS[rng.random_range(0..LABELS.len())];

        Ok(Prediction {
            label: label.to_string(),
            confidence: rng.random_range(0.0f32..100.0),
        })
    }
}
