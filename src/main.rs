//! Bazaar - A local business marketplace desktop front-end
//! Built with iced; greets visitors with a rotating hero slider

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod i18n;
mod ui;
mod utils;

use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // Initialize tracing for logging; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bazaar=info")),
        )
        .init();

    // Run as a daemon with one main window opened at boot; closing it exits
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
