#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod ui;

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "work_tracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Optional dataset snapshot to open instead of the remembered one.
    let startup_path = std::env::args_os().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 500.0])
            .with_title("Work Tracker"),
        ..Default::default()
    };

    eframe::run_native(
        "Work Tracker",
        options,
        Box::new(move |cc| Ok(Box::new(app::TrackerApp::new(cc, startup_path)))),
    )
}
