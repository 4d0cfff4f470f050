#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod error;
mod io;
mod model;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = config::AppSettings::load();
    tracing::info!("Starting SOP Milestone Dashboard {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 500.0])
            .with_title("SOP Milestone Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "SOP Milestone Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(app::MilestoneApp::new(cc, settings)))),
    )
}
