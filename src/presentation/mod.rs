pub mod chart_adapter;
pub mod wasm_api;

pub use chart_adapter::*;
