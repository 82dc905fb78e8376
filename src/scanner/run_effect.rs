use crate::frame_capture::CaptureError;
use crate::scanner::core::{Effect, Event};
use crate::scanner::run::Scanner;
use std::sync::mpsc::Sender;

impl Scanner {
    pub(crate) fn run_effect(&self, effect: Effect, event_queue: Sender<Event>) {
        let _ = self
            .logger
            .info(&format!("Running effect: {:?}", effect));

        match effect {
            Effect::SubscribeUiEvents => {
                let events = self.device_ui.lock().unwrap().events();
                loop {
                    match events.recv() {
                        Ok(event) => {
                            if event_queue.send(Event::Ui(event)).is_err() {
                                continue;
                            }
                        }
                        Err(_) => return,
                    }
                }
            }
            Effect::AcquireCamera { facing } => {
                let acquired = self.device_camera.acquire(facing);
                let _ = event_queue.send(Event::CameraAcquireDone(acquired));
            }
            Effect::CountCameras => {
                let counted = self.device_camera.list_cameras();
                let _ = event_queue.send(Event::CameraCountDone(counted));
            }
            Effect::SwitchCamera { session } => {
                let switched = self.device_camera.switch(session);
                let _ = event_queue.send(Event::CameraSwitchDone(switched));
            }
            Effect::CaptureFrame { session } => {
                let captured = self
                    .device_camera
                    .read_frame(&session)
                    .map_err(CaptureError::from)
                    .and_then(|frame| self.frame_capture.capture(&frame));
                let _ = event_queue.send(Event::FrameCaptureDone(captured));
            }
            Effect::Predict { image, generation } => {
                let result = self.prediction_client.predict(&image);
                if let Err(error) = &result {
                    let _ = self
                        .logger
                        .error(&format!("Error analyzing image: {}", error));
                }
                let _ = event_queue.send(Event::PredictDone { generation, result });
            }
        }
    }
}
