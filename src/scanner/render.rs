use crate::device_ui::interface::{ReviewBody, Screen};
use crate::scanner::core::{ReviewOutcome, State};
use crate::scanner::run::Scanner;

/// Projects the core state onto the UI view model.
pub fn view(state: &State) -> Screen {
    match state {
        State::Starting => Screen::Connecting,
        State::CameraFailed { message } => Screen::CameraError {
            message: message.clone(),
        },
        State::Capturing {
            session,
            switch_visible,
            notice,
            ..
        } => Screen::Camera {
            capture_enabled: true,
            switch_visible: *switch_visible,
            facing: session.facing,
            notice: notice.clone(),
        },
        State::SwitchingCamera {
            facing,
            switch_visible,
            ..
        } => Screen::Camera {
            capture_enabled: false,
            switch_visible: *switch_visible,
            facing: *facing,
            notice: None,
        },
        State::TakingSnapshot {
            session,
            switch_visible,
            ..
        } => Screen::Camera {
            capture_enabled: false,
            switch_visible: *switch_visible,
            facing: session.facing,
            notice: None,
        },
        State::Reviewing { image, outcome, .. } => Screen::Review {
            image: image.clone(),
            body: match outcome {
                ReviewOutcome::Analyzing => ReviewBody::Analyzing,
                ReviewOutcome::Predicted(prediction) => ReviewBody::Result {
                    label: prediction.label.clone(),
                    confidence_percent: format!("{:.2}%", prediction.confidence),
                },
                ReviewOutcome::Failed(message) => ReviewBody::Error {
                    message: message.clone(),
                },
            },
        },
    }
}

impl Scanner {
    pub(crate) fn render(
        &self,
        state: &State,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_ui.lock().unwrap().render(&view(state))
    }
}
