//! GUI runner - launches the Aura dashboard

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::AuraApp;
use crate::config::Config;
use crate::controller::{Controller, ControllerOptions};
use crate::player::SystemPlayer;
use crate::store::ClientStore;

/// Run the dashboard until the window is closed
pub fn run_gui(config: Config) -> Result<()> {
    let state_path = config.state_path();
    info!("Client state: {}", state_path.display());
    info!("API server: {}", config.server.base_url);

    let store = ClientStore::open_or_empty(&state_path);
    let api = Arc::new(config.api_client());
    let player = Box::new(SystemPlayer::from_settings(&config.video));
    let options = ControllerOptions::from_config(&config, chrono::Local::now().date_naive());
    let controller = Controller::new(api, store, player, options);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Aura Points",
        native_options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(AuraApp::new(controller, &cc.egui_ctx)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
