use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_ui::interface::DeviceUi;
use crate::frame_capture::FrameCapture;
use crate::library::logger::interface::Logger;
use crate::prediction::interface::PredictionClient;
use crate::scanner::core::{init, transition, Effect, Event};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct Scanner {
    pub(crate) config: Config,
    pub(crate) logger: Arc<dyn Logger + Send + Sync>,
    pub(crate) device_camera: Arc<dyn DeviceCamera + Send + Sync>,
    pub(crate) device_ui: Arc<Mutex<dyn DeviceUi + Send + Sync>>,
    pub(crate) prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    pub(crate) frame_capture: FrameCapture,
    pub(crate) event_sender: Sender<Event>,
    pub(crate) event_receiver: Arc<Mutex<Receiver<Event>>>,
}

impl Scanner {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        device_camera: Arc<dyn DeviceCamera + Send + Sync>,
        device_ui: Arc<Mutex<dyn DeviceUi + Send + Sync>>,
        prediction_client: Arc<dyn PredictionClient + Send + Sync>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();
        let frame_capture = FrameCapture::new(config.jpeg_quality);

        Self {
            config,
            logger: logger.with_namespace("scanner"),
            device_camera,
            device_ui,
            prediction_client,
            frame_capture,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let effect_sender = self.event_sender.clone();
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect, effect_sender));
        }
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_state, effects) = init(&self.config);

        self.render(&current_state)?;
        self.spawn_effects(effects);

        loop {
            match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => {
                    let _ = self
                        .logger
                        .info(&format!("\nstate:\n\t{:?}\n\nevent:\n\t{:?}", current_state, event));

                    let (new_state, new_effects) = transition(current_state, event);

                    let _ = self.logger.info(&format!(
                        "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
                        new_state, new_effects
                    ));

                    current_state = new_state;
                    self.render(&current_state)?;
                    self.spawn_effects(new_effects);
                }
                Err(e) => {
                    return Err(Box::new(e));
                }
            }
        }
    }
}
