//! Policy Explorer - Tax-Benefit Policy Explorer
//!
//! A Rust application for editing policy reforms and households and viewing
//! their impact.

use anyhow::Context;
use eframe::egui;
use policy_explorer::backend::LocalBackend;
use policy_explorer::config::AppConfig;
use policy_explorer::gui::PolicyExplorerApp;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load().context("loading configuration")?;
    tracing::info!(year = %config.year, "starting policy explorer");

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Policy Explorer"),
        ..Default::default()
    };

    let backend = Arc::new(LocalBackend::new());

    // Run the application
    eframe::run_native(
        "Policy Explorer",
        options,
        Box::new(move |cc| Ok(Box::new(PolicyExplorerApp::new(cc, config, backend)))),
    )
    .map_err(|e| anyhow::anyhow!("{}", e))
}
