pub mod canvas_renderer;
pub mod layout;
pub mod registry;

pub use canvas_renderer::CanvasRenderer;
pub use registry::{ChartRegistry, chart_registry, register_chart_renderers};
