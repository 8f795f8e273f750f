use anyhow::Result;
use eframe::egui;
use log::info;

mod app;
mod config;
mod geometry;
mod modulation;
mod render;

use app::LinefieldApp;

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting linefield visualizer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("linefield"),
        ..Default::default()
    };

    eframe::run_native(
        "linefield",
        options,
        Box::new(|_cc| Ok(Box::new(LinefieldApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}
