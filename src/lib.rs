use wasm_bindgen::prelude::*;

use crate::config::BoardConfig;
use crate::domain::logging::LogComponent;

#[cfg(not(feature = "logic-only"))]
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

/// Module start: panic hook, logging, then mount the board if the page has a root for it
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::from_location();
    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::new(config.log_level)));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider::new()));

    crate::log_info!(
        LogComponent::Presentation("Initialize"),
        "🚀 Rate board initialized (log level {})",
        config.log_level
    );

    #[cfg(not(feature = "logic-only"))]
    {
        if let Err(err) = app::mount_rate_board(&config) {
            crate::log_error!(LogComponent::Presentation("Initialize"), "❌ {}", err);
        }
    }
}
