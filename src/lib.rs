use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, get_logger};

pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;
pub mod time_utils;
pub mod view_state;

pub use presentation::wasm_api::mount_dashboard;

/// Wire logging, panics and chart renderers before anything is mounted.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));

    let registry = infrastructure::rendering::register_chart_renderers();

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Score dashboard ready ({} chart renderers)", registry.len()),
    );
}
