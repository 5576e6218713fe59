use eframe::egui;
use log::info;

use vidstage::VidstageApp;
use vidstage::config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
        .format_timestamp_millis()
        .init();

    info!("Vidstage v{} starting...", env!("CARGO_PKG_VERSION"));

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Vidstage v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size(config::WINDOW_SIZE)
            .with_resizable(true)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Vidstage",
        native_options,
        Box::new(|_cc| Ok(Box::new(VidstageApp::new()))),
    )?;

    info!("Application exiting");
    Ok(())
}
