mod backend_bridge;
mod config;
mod controller;
mod ui;

use std::sync::Arc;

use catalog::Catalog;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{load_settings, CliArgs};
use crate::controller::events::UiEvent;
use crate::ui::PortfolioApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = CliArgs::parse();
    let settings = load_settings(&args)?;
    tracing::info!(
        maintenance = settings.maintenance_mode,
        delivery_enabled = !settings.form_endpoint.is_empty(),
        "starting portfolio app"
    );

    let catalog = match &settings.catalog_path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::bundled()?,
    };
    let catalog = Arc::new(catalog);
    tracing::info!(projects = catalog.len(), "project catalog loaded");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);

    backend_bridge::runtime::launch(settings.form_endpoint.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Hamza Lamkhailif | Data Analyst Portfolio")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Hamza Lamkhailif | Data Analyst Portfolio",
        options,
        Box::new(|_cc| {
            Ok(Box::new(PortfolioApp::new(
                cmd_tx,
                ui_rx,
                catalog,
                settings.maintenance_mode,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run portfolio app: {err}"))
}
