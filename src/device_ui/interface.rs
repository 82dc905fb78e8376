use crate::device_camera::interface::FacingMode;
use crate::frame_capture::CapturedImage;
use std::error::Error;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    CapturePressed,
    SwitchCameraPressed,
    TryAgainPressed,
}

/// What the result panel of the review screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewBody {
    Analyzing,
    Result {
        label: String,
        /// Formatted with two decimal places, e.g. "93.50%".
        confidence_percent: String,
    },
    Error {
        message: String,
    },
}

/// View model handed to the UI device. One variant per visible screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Connecting,
    CameraError {
        message: String,
    },
    Camera {
        capture_enabled: bool,
        switch_visible: bool,
        facing: FacingMode,
        notice: Option<String>,
    },
    Review {
        image: CapturedImage,
        body: ReviewBody,
    },
}

pub trait DeviceUi: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;
    fn render(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>>;
    fn events(&self) -> Receiver<UiEvent>;
}
