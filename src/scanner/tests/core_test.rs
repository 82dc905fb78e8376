use crate::config::Config;
use crate::device_camera::interface::{CameraError, CameraSession, FacingMode};
use crate::device_ui::interface::UiEvent;
use crate::frame_capture::{CaptureError, CapturedImage};
use crate::prediction::interface::{Prediction, PredictionError};
use crate::scanner::core::{init, transition, Effect, Event, ReviewOutcome, State};
use crate::scanner::render::view;
use crate::device_ui::interface::Screen;

fn session() -> CameraSession {
    CameraSession {
        id: 7,
        facing: FacingMode::Environment,
    }
}

fn image() -> CapturedImage {
    CapturedImage {
        width: 64,
        height: 48,
        jpeg: vec![0xff, 0xd8, 0xff, 0xd9],
    }
}

fn capturing(switch_visible: bool, generation: u64) -> State {
    State::Capturing {
        session: session(),
        switch_visible,
        generation,
        notice: None,
    }
}

#[test]
fn test_init() {
    let config = Config::default();
    let (state, effects) = init(&config);

    assert_eq!(state, State::Starting);
    assert_eq!(
        effects,
        vec![
            Effect::SubscribeUiEvents,
            Effect::AcquireCamera {
                facing: config.initial_facing
            }
        ]
    );
}

#[test]
fn test_acquire_success_enters_capturing_and_counts_cameras() {
    let (state, effects) = transition(
        State::Starting,
        Event::CameraAcquireDone(Ok(session())),
    );

    match state {
        State::Capturing {
            switch_visible,
            generation,
            ..
        } => {
            assert!(!switch_visible);
            assert_eq!(generation, 0);
        }
        _ => panic!("Unexpected state: {:?}", state),
    }
    assert_eq!(effects, vec![Effect::CountCameras]);
}

#[test]
fn test_acquire_failure_disables_capture() {
    let (state, effects) = transition(
        State::Starting,
        Event::CameraAcquireDone(Err(CameraError::PermissionDenied)),
    );

    assert!(matches!(state, State::CameraFailed { .. }));
    assert!(effects.is_empty());

    match view(&state) {
        Screen::CameraError { message } => {
            assert!(message.contains("denied"));
        }
        screen => panic!("Unexpected screen: {:?}", screen),
    }
}

#[test]
fn test_single_camera_hides_switch_control() {
    let (state, _) = transition(capturing(false, 0), Event::CameraCountDone(Ok(1)));

    match state {
        State::Capturing { switch_visible, .. } => assert!(!switch_visible),
        _ => panic!("Unexpected state: {:?}", state),
    }
}

#[test]
fn test_multiple_cameras_show_switch_control() {
    let (state, _) = transition(capturing(false, 0), Event::CameraCountDone(Ok(2)));

    match state {
        State::Capturing { switch_visible, .. } => assert!(switch_visible),
        _ => panic!("Unexpected state: {:?}", state),
    }
}

#[test]
fn test_capture_flow() {
    // Pressing capture takes a snapshot with the live session.
    let (state, effects) = transition(capturing(true, 0), Event::Ui(UiEvent::CapturePressed));

    assert!(matches!(state, State::TakingSnapshot { .. }));
    assert_eq!(effects, vec![Effect::CaptureFrame { session: session() }]);

    // The encoded still moves the app into review and fires the prediction.
    let (state, effects) = transition(state, Event::FrameCaptureDone(Ok(image())));

    match &state {
        State::Reviewing {
            generation,
            outcome,
            ..
        } => {
            assert_eq!(*generation, 1);
            assert_eq!(*outcome, ReviewOutcome::Analyzing);
        }
        _ => panic!("Unexpected state: {:?}", state),
    }
    assert_eq!(
        effects,
        vec![Effect::Predict {
            image: image(),
            generation: 1
        }]
    );
}

#[test]
fn test_capture_of_degenerate_frame_returns_to_capturing() {
    let state = State::TakingSnapshot {
        session: session(),
        switch_visible: false,
        generation: 0,
    };

    let (state, effects) = transition(state, Event::FrameCaptureDone(Err(CaptureError::EmptyFrame)));

    match state {
        State::Capturing { notice, .. } => {
            assert!(notice.unwrap().contains("no dimensions"));
        }
        _ => panic!("Unexpected state: {:?}", state),
    }
    assert!(effects.is_empty());
}

#[test]
fn test_prediction_fills_review_panel() {
    let state = State::Reviewing {
        session: session(),
        switch_visible: false,
        generation: 1,
        image: image(),
        outcome: ReviewOutcome::Analyzing,
    };

    let (state, effects) = transition(
        state,
        Event::PredictDone {
            generation: 1,
            result: Ok(Prediction {
                label: "cat".to_string(),
                confidence: 93.5,
            }),
        },
    );

    match &state {
        State::Reviewing { outcome, .. } => {
            assert_eq!(
                *outcome,
                ReviewOutcome::Predicted(Prediction {
                    label: "cat".to_string(),
                    confidence: 93.5,
                })
            );
        }
        _ => panic!("Unexpected state: {:?}", state),
    }
    assert!(effects.is_empty());
}

#[test]
fn test_stale_prediction_is_discarded() {
    let state = State::Reviewing {
        session: session(),
        switch_visible: false,
        generation: 2,
        image: image(),
        outcome: ReviewOutcome::Analyzing,
    };

    // A response from the first capture arrives after the second capture.
    let (new_state, effects) = transition(
        state.clone(),
        Event::PredictDone {
            generation: 1,
            result: Ok(Prediction {
                label: "stale".to_string(),
                confidence: 1.0,
            }),
        },
    );

    assert_eq!(new_state, state);
    assert!(effects.is_empty());
}

#[test]
fn test_prediction_error_is_shown() {
    let state = State::Reviewing {
        session: session(),
        switch_visible: false,
        generation: 1,
        image: image(),
        outcome: ReviewOutcome::Analyzing,
    };

    let (state, _) = transition(
        state,
        Event::PredictDone {
            generation: 1,
            result: Err(PredictionError::Server(500)),
        },
    );

    match state {
        State::Reviewing {
            outcome: ReviewOutcome::Failed(message),
            ..
        } => assert!(message.contains("500")),
        _ => panic!("Unexpected state: {:?}", state),
    }
}

#[test]
fn test_try_again_returns_to_capturing() {
    let state = State::Reviewing {
        session: session(),
        switch_visible: true,
        generation: 3,
        image: image(),
        outcome: ReviewOutcome::Failed("network error".to_string()),
    };

    let (state, effects) = transition(state, Event::Ui(UiEvent::TryAgainPressed));

    match &state {
        State::Capturing {
            switch_visible,
            generation,
            notice,
            ..
        } => {
            assert!(switch_visible);
            assert_eq!(*generation, 3);
            assert!(notice.is_none());
        }
        _ => panic!("Unexpected state: {:?}", state),
    }
    assert!(effects.is_empty());

    match view(&state) {
        Screen::Camera {
            capture_enabled, ..
        } => assert!(capture_enabled),
        screen => panic!("Unexpected screen: {:?}", screen),
    }
}

#[test]
fn test_switch_camera_flow() {
    let (state, effects) = transition(capturing(true, 0), Event::Ui(UiEvent::SwitchCameraPressed));

    match &state {
        State::SwitchingCamera { facing, .. } => {
            assert_eq!(*facing, FacingMode::User);
        }
        _ => panic!("Unexpected state: {:?}", state),
    }
    assert_eq!(effects, vec![Effect::SwitchCamera { session: session() }]);

    let new_session = CameraSession {
        id: 8,
        facing: FacingMode::User,
    };
    let (state, effects) = transition(state, Event::CameraSwitchDone(Ok(new_session.clone())));

    match state {
        State::Capturing { session, .. } => assert_eq!(session, new_session),
        _ => panic!("Unexpected state: {:?}", state),
    }
    assert!(effects.is_empty());
}

#[test]
fn test_switch_failure_disables_capture() {
    let state = State::SwitchingCamera {
        facing: FacingMode::User,
        switch_visible: true,
        generation: 0,
    };

    let (state, _) = transition(
        state,
        Event::CameraSwitchDone(Err(CameraError::Device("gone".to_string()))),
    );

    assert!(matches!(state, State::CameraFailed { .. }));
}

#[test]
fn test_capture_press_is_ignored_while_switching() {
    let state = State::SwitchingCamera {
        facing: FacingMode::User,
        switch_visible: true,
        generation: 0,
    };

    let (new_state, effects) = transition(state.clone(), Event::Ui(UiEvent::CapturePressed));

    assert_eq!(new_state, state);
    assert!(effects.is_empty());
}
