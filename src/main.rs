use config::Config;
use device_camera::impl_fake::FakeCamera;
use device_ui::impl_gui::DeviceUiGui;
use device_ui::interface::DeviceUi;
use library::logger::impl_console::LoggerConsole;
use prediction::impl_http::HttpPredictionClient;
use scanner::run::Scanner;
use std::sync::{Arc, Mutex};

mod config;
mod device_camera;
mod device_ui;
mod frame_capture;
mod library;
mod prediction;
mod scanner;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let device_camera = Arc::new(
        FakeCamera::new(logger.clone())
            .with_frame_size(config.ideal_width, config.ideal_height),
    );

    let mut device_ui = DeviceUiGui::new();
    device_ui.init()?;
    let device_ui = Arc::new(Mutex::new(device_ui));

    let prediction_client = Arc::new(HttpPredictionClient::new(
        logger.clone(),
        config.predict_endpoint.clone(),
    ));

    let scanner = Scanner::new(config, logger, device_camera, device_ui, prediction_client);

    scanner.run()?;

    Ok(())
}
