use crate::frame_capture::CapturedImage;
use crate::library::logger::interface::Logger;
use crate::prediction::interface::{Prediction, PredictionClient, PredictionError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct PredictRequest {
    image: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    prediction: String,
    confidence: f32,
}

pub struct HttpPredictionClient {
    logger: Arc<dyn Logger + Send + Sync>,
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>, endpoint: String) -> Self {
        Self {
            logger: logger.with_namespace("prediction").with_namespace("http"),
            client: reqwest::blocking::Client::new(),
            endpoint,
        }
    }
}

impl PredictionClient for HttpPredictionClient {
    fn predict(&self, image: &CapturedImage) -> Result<Prediction, PredictionError> {
        let request = PredictRequest {
            image: BASE64.encode(&image.jpeg),
        };

        let _ = self.logger.info(&format!(
            "Sending {} byte image to {}",
            image.jpeg.len(),
            self.endpoint
        ));

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let _ = self
                .logger
                .error(&format!("Prediction request failed with {}", status));
            return Err(PredictionError::Server(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| PredictionError::Network(e.to_string()))?;

        let parsed: PredictResponse =
            serde_json::from_str(&body).map_err(|e| PredictionError::Protocol(e.to_string()))?;

        if !parsed.confidence.is_finite() {
            return Err(PredictionError::Protocol(
                "confidence is not a finite number".to_string(),
            ));
        }

        Ok(Prediction {
            label: parsed.prediction,
            confidence: parsed.confidence,
        })
    }
}
