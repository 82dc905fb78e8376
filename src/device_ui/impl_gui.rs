use crate::device_camera::interface::FacingMode;
use crate::device_ui::interface::{DeviceUi, ReviewBody, Screen, UiEvent};
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone)]
struct ScannerWindow {
    screen: Arc<Mutex<Screen>>,
    event_senders: Arc<Mutex<Vec<Sender<UiEvent>>>>,
    texture: Arc<Mutex<Option<(usize, egui::TextureHandle)>>>,
}

impl ScannerWindow {
    fn send(&self, event: UiEvent) {
        self.event_senders
            .lock()
            .unwrap()
            .retain(|sender| sender.send(event).is_ok());
    }

    fn captured_texture(
        &self,
        ctx: &egui::Context,
        jpeg: &[u8],
    ) -> Option<egui::TextureHandle> {
        let mut texture = self.texture.lock().unwrap();
        if let Some((key, handle)) = texture.as_ref() {
            if *key == jpeg.len() {
                return Some(handle.clone());
            }
        }

        let decoded = image::load_from_memory(jpeg).ok()?.to_rgb8();
        let size = [decoded.width() as usize, decoded.height() as usize];
        let color_image = egui::ColorImage::from_rgb(size, decoded.as_raw());
        let handle = ctx.load_texture("captured-image", color_image, Default::default());
        *texture = Some((jpeg.len(), handle.clone()));
        Some(handle)
    }
}

impl eframe::App for ScannerWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The model thread mutates the screen buffer between interactions.
        ctx.request_repaint_after(Duration::from_millis(100));

        let screen = self.screen.lock().unwrap().clone();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);

                match screen {
                    Screen::Connecting => {
                        ui.spinner();
                        ui.label("Connecting to camera...");
                    }
                    Screen::CameraError { message } => {
                        ui.colored_label(
                            egui::Color32::RED,
                            "Error accessing camera. Please make sure you have given \
                             permission to use the camera and try again.",
                        );
                        ui.label(message);
                    }
                    Screen::Camera {
                        capture_enabled,
                        switch_visible,
                        facing,
                        notice,
                    } => {
                        let facing_text = match facing {
                            FacingMode::User => "Front camera",
                            FacingMode::Environment => "Back camera",
                        };
                        ui.label(facing_text);

                        if let Some(notice) = notice {
                            ui.colored_label(egui::Color32::RED, notice);
                        }

                        ui.add_space(10.0);
                        if ui
                            .add_enabled(capture_enabled, egui::Button::new("Capture"))
                            .clicked()
                        {
                            self.send(UiEvent::CapturePressed);
                        }

                        if switch_visible
                            && ui
                                .add_enabled(
                                    capture_enabled,
                                    egui::Button::new("Switch Camera"),
                                )
                                .clicked()
                        {
                            self.send(UiEvent::SwitchCameraPressed);
                        }
                    }
                    Screen::Review { image, body } => {
                        if let Some(texture) = self.captured_texture(ctx, &image.jpeg) {
                            ui.image(&texture);
                        }

                        ui.add_space(10.0);
                        match body {
                            ReviewBody::Analyzing => {
                                ui.spinner();
                                ui.label("Analyzing image...");
                            }
                            ReviewBody::Result {
                                label,
                                confidence_percent,
                            } => {
                                ui.heading("Prediction:");
                                ui.label(label);
                                ui.label(format!("Confidence: {}", confidence_percent));
                            }
                            ReviewBody::Error { message } => {
                                ui.colored_label(
                                    egui::Color32::RED,
                                    "Error analyzing image. Please try again.",
                                );
                                ui.label(message);
                            }
                        }

                        ui.add_space(10.0);
                        if ui.button("Try Again").clicked() {
                            self.send(UiEvent::TryAgainPressed);
                        }
                    }
                }
            });
        });
    }
}

pub struct DeviceUiGui {
    screen: Arc<Mutex<Screen>>,
    event_senders: Arc<Mutex<Vec<Sender<UiEvent>>>>,
}

impl DeviceUiGui {
    pub fn new() -> Self {
        Self {
            screen: Arc::new(Mutex::new(Screen::Connecting)),
            event_senders: Arc::new(Mutex::new(vec![])),
        }
    }
}

impl DeviceUi for DeviceUiGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let window = ScannerWindow {
            screen: self.screen.clone(),
            event_senders: self.event_senders.clone(),
            texture: Arc::new(Mutex::new(None)),
        };

        // The window blocks its own thread until closed.
        thread::spawn(move || {
            let options = eframe::NativeOptions {
                viewport: egui::ViewportBuilder::default()
                    .with_inner_size([480.0, 640.0])
                    .with_resizable(false),
                ..Default::default()
            };

            let _ = eframe::run_native("Plastic Scanner", options, Box::new(|_cc| Box::new(window)));
        });

        Ok(())
    }

    fn render(&mut self, screen: &Screen) -> Result<(), Box<dyn Error + Send + Sync>> {
        *self.screen.lock().unwrap() = screen.clone();
        Ok(())
    }

    fn events(&self) -> Receiver<UiEvent> {
        let (sender, receiver) = channel();
        self.event_senders.lock().unwrap().push(sender);
        receiver
    }
}
