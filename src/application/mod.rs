pub mod dashboard_service;
pub mod feed;
pub mod polling;

pub use dashboard_service::*;
pub use feed::*;
pub use polling::*;
