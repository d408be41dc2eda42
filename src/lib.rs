#[cfg(not(feature = "logic-only"))]
use wasm_bindgen::prelude::*;

pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(not(feature = "logic-only"))]
pub mod app;
#[cfg(not(feature = "logic-only"))]
pub mod global_state;
#[cfg(not(feature = "logic-only"))]
pub mod macros;
#[cfg(not(feature = "logic-only"))]
pub mod presentation;

/// Wire up logging, build the roulette and mount the UI
#[cfg(not(feature = "logic-only"))]
#[wasm_bindgen(start)]
pub fn initialize() {
    use crate::domain::logging::{LogComponent, LogLevel, get_logger};
    use leptos::SignalGetUntracked;

    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new()));
    domain::logging::init_time_provider(Box::new(
        infrastructure::services::BrowserTimeProvider::new(),
    ));
    domain::logging::set_min_level(if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    });

    let config = global_state::roulette_config().get_untracked();
    presentation::install_roulette(config);
    leptos::mount_to_body(app::App);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 shared lists ready");
}
