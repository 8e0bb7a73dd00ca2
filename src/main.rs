// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod analysis;
mod api;
mod app;
mod export;
mod settings;
mod state;
mod ui;

use app::ClaimSmartApp;
use settings::Settings;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            warn!("failed to load configuration, using defaults: {:#}", e);
            Settings::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("ClaimSmart"),
        ..Default::default()
    };

    eframe::run_native(
        "ClaimSmart",
        options,
        Box::new(move |_cc| Box::new(ClaimSmartApp::new(settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
