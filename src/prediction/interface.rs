use crate::frame_capture::CapturedImage;
use thiserror::Error;

/// Label/confidence pair returned by the remote classification endpoint.
/// Confidence is a percentage in 0..=100.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status: {0}")]
    Server(u16),
    #[error("unexpected response shape: {0}")]
    Protocol(String),
}

/// Single best-effort request per capture. No retry, no timeout, no
/// cancellation.
pub trait PredictionClient: Send + Sync {
    fn predict(&self, image: &CapturedImage) -> Result<Prediction, PredictionError>;
}
