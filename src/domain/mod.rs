//! Domain layer: score records, aggregation services, chart data and the
//! shared logging/error vocabulary.

pub mod chart;
pub mod errors;
pub mod logging;
pub mod scores;
