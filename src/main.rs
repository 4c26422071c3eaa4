#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod presentation;

#[cfg(test)]
mod app_theme_tests;

use crate::core::models::AppConfig;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("[MAIN] Failed to load settings: {:#}, using defaults", e);
        let mut config = AppConfig::default();
        config.apply_environment_overrides(|key| std::env::var(key).ok());
        config
    });

    let initial_image_path = std::env::args().nth(1);
    let services = app::AppServices::initialize(config, initial_image_path)?;

    iced::application(
        move || app::AssistApp::build(services.clone()),
        app::AssistApp::handle_update,
        app::AssistApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .window_size(iced::Size::new(760.0, 860.0))
    .run()?;

    log::info!("[MAIN] Application closed");
    Ok(())
}
