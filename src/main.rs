//! Fragment Timeline
//!
//! A desktop editor for laying out labelled fragments on fixed timeline rows,
//! with wheel pan/zoom, drag-to-move, edge snapping and JSON import/export.

mod app;
mod components;
mod constants;
mod core;
mod error;
mod hotkeys;
mod state;
mod timeline;

use dioxus::desktop::{Config, WindowBuilder, LogicalSize};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!("starting fragment timeline");

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Fragment Timeline")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true)
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
