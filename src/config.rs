use crate::device_camera::interface::FacingMode;

#[derive(Debug, Clone)]
pub struct Config {
    pub predict_endpoint: String,
    pub initial_facing: FacingMode,
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub jpeg_quality: u8,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Local Functions host, same path the deployed app serves under.
            predict_endpoint: "http://127.0.0.1:7071/api/predict".to_string(),
            initial_facing: FacingMode::Environment,
            ideal_width: 1280,
            ideal_height: 720,
            jpeg_quality: 80,
            logger_timezone: mountain_standard_time(),
        }
    }
}

fn mountain_standard_time() -> chrono::FixedOffset {
    chrono::FixedOffset::west_opt(7 * 3600).unwrap()
}
