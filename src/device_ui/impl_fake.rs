use crate::device_ui::interface::{DeviceUi, Screen, UiEvent};
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// Records every rendered screen and lets tests push scripted button presses.
#[allow(dead_code)]
pub struct FakeUi {
    logger: Arc<dyn Logger + Send + Sync>,
    screens: Mutex<Vec<Screen>>,
    event_senders: Mutex<Vec<Sender<UiEvent>>>,
}

#[allow(dead_code)]
impl FakeUi {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("ui").with_namespace("fake"),
            screens: Mutex::new(vec![]),
            event_senders: Mutex::new(vec![]),
        }
    }

    pub fn press(&self, event: UiEvent) {
        self.event_senders
            .lock()
            .unwrap()
            .retain(|sender| sender.send(event).is_ok());
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.screens.lock().unwrap().clone()
    }

    pub fn last_screen(&self) -> Option<Screen> {
        self.screens.lock().unwrap().last().cloned()
    }
}

impl DeviceUi for FakeUi {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info("FakeUi::init()")?;
        Ok(())
    }

    fn render(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!("FakeUi::render({:?})", screen))?;
        self.screens.lock().unwrap().push(screen.clone());
        Ok(())
    }

    fn events(&self) -> Receiver<UiEvent> {
        let (sender, receiver) = channel();
        self.event_senders.lock().unwrap().push(sender);
        receiver
    }
}
