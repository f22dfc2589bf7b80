use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

/// Module start hook: panic messages and log timestamps. The logger itself
/// is installed by `startDashboard`, which knows the configured level.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    get_logger().debug(LogComponent::Presentation("Initialize"), "wasm module initialized");
}
