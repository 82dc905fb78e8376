use crate::config::Config;
use crate::device_camera::interface::{CameraError, CameraSession, FacingMode};
use crate::device_ui::interface::UiEvent;
use crate::frame_capture::{CaptureError, CapturedImage};
use crate::prediction::interface::{Prediction, PredictionError};

/// The app alternates between a live-camera screen and a review screen. The
/// generation counter increments per completed capture so that a prediction
/// response arriving after a newer capture is discarded instead of
/// overwriting the review panel.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Starting,
    CameraFailed {
        message: String,
    },
    Capturing {
        session: CameraSession,
        switch_visible: bool,
        generation: u64,
        notice: Option<String>,
    },
    SwitchingCamera {
        facing: FacingMode,
        switch_visible: bool,
        generation: u64,
    },
    TakingSnapshot {
        session: CameraSession,
        switch_visible: bool,
        generation: u64,
    },
    Reviewing {
        session: CameraSession,
        switch_visible: bool,
        generation: u64,
        image: CapturedImage,
        outcome: ReviewOutcome,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewOutcome {
    Analyzing,
    Predicted(Prediction),
    Failed(String),
}

#[derive(Debug)]
pub enum Event {
    CameraAcquireDone(Result<CameraSession, CameraError>),
    CameraCountDone(Result<usize, CameraError>),
    CameraSwitchDone(Result<CameraSession, CameraError>),
    Ui(UiEvent),
    FrameCaptureDone(Result<CapturedImage, CaptureError>),
    PredictDone {
        generation: u64,
        result: Result<Prediction, PredictionError>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeUiEvents,
    AcquireCamera { facing: FacingMode },
    CountCameras,
    SwitchCamera { session: CameraSession },
    CaptureFrame { session: CameraSession },
    Predict { image: CapturedImage, generation: u64 },
}

pub fn init(config: &Config) -> (State, Vec<Effect>) {
    (
        State::Starting,
        vec![
            Effect::SubscribeUiEvents,
            Effect::AcquireCamera {
                facing: config.initial_facing,
            },
        ],
    )
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match (state.clone(), event) {
        // Startup
        (State::Starting, Event::CameraAcquireDone(Ok(session))) => (
            State::Capturing {
                session,
                switch_visible: false,
                generation: 0,
                notice: None,
            },
            vec![Effect::CountCameras],
        ),
        (State::Starting, Event::CameraAcquireDone(Err(error))) => (
            State::CameraFailed {
                message: error.to_string(),
            },
            vec![],
        ),
        (
            State::Capturing {
                session,
                generation,
                notice,
                ..
            },
            Event::CameraCountDone(Ok(count)),
        ) => (
            State::Capturing {
                session,
                switch_visible: count > 1,
                generation,
                notice,
            },
            vec![],
        ),

        // Capture -> review
        (
            State::Capturing {
                session,
                switch_visible,
                generation,
                ..
            },
            Event::Ui(UiEvent::CapturePressed),
        ) => (
            State::TakingSnapshot {
                session: session.clone(),
                switch_visible,
                generation,
            },
            vec![Effect::CaptureFrame { session }],
        ),
        (
            State::TakingSnapshot {
                session,
                switch_visible,
                generation,
            },
            Event::FrameCaptureDone(Ok(image)),
        ) => {
            let generation = generation + 1;
            (
                State::Reviewing {
                    session,
                    switch_visible,
                    generation,
                    image: image.clone(),
                    outcome: ReviewOutcome::Analyzing,
                },
                vec![Effect::Predict { image, generation }],
            )
        }
        (
            State::TakingSnapshot {
                session,
                switch_visible,
                generation,
            },
            Event::FrameCaptureDone(Err(error)),
        ) => (
            State::Capturing {
                session,
                switch_visible,
                generation,
                notice: Some(error.to_string()),
            },
            vec![],
        ),
        (
            State::Reviewing {
                session,
                switch_visible,
                generation,
                image,
                ..
            },
            Event::PredictDone {
                generation: response_generation,
                result,
            },
        ) if response_generation == generation => {
            let outcome = match result {
                Ok(prediction) => ReviewOutcome::Predicted(prediction),
                Err(error) => ReviewOutcome::Failed(error.to_string()),
            };
            (
                State::Reviewing {
                    session,
                    switch_visible,
                    generation,
                    image,
                    outcome,
                },
                vec![],
            )
        }
        (
            State::Reviewing {
                session,
                switch_visible,
                generation,
                ..
            },
            Event::Ui(UiEvent::TryAgainPressed),
        ) => (
            State::Capturing {
                session,
                switch_visible,
                generation,
                notice: None,
            },
            vec![],
        ),

        // Camera switching. Capture stays disabled until the new session is
        // ready.
        (
            State::Capturing {
                session,
                switch_visible,
                generation,
                ..
            },
            Event::Ui(UiEvent::SwitchCameraPressed),
        ) => (
            State::SwitchingCamera {
                facing: session.facing.flipped(),
                switch_visible,
                generation,
            },
            vec![Effect::SwitchCamera { session }],
        ),
        (
            State::SwitchingCamera {
                switch_visible,
                generation,
                ..
            },
            Event::CameraSwitchDone(Ok(session)),
        ) => (
            State::Capturing {
                session,
                switch_visible,
                generation,
                notice: None,
            },
            vec![],
        ),
        (State::SwitchingCamera { .. }, Event::CameraSwitchDone(Err(error))) => (
            State::CameraFailed {
                message: error.to_string(),
            },
            vec![],
        ),

        // Everything else, including stale prediction responses
        _ => (state, vec![]),
    }
}
