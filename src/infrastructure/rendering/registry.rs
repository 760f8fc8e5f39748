//! Process-wide chart renderer registration.
//!
//! Renderers are registered once before the first chart is drawn; calling
//! [`register_chart_renderers`] again returns the existing registry.

use super::canvas_renderer::{render_line_chart, render_pie_chart};
use crate::domain::{
    chart::{ChartConfig, ChartKind},
    logging::{LogComponent, get_logger},
};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

pub type RenderFn = fn(&CanvasRenderingContext2d, &ChartConfig, f64, f64) -> Result<(), JsValue>;

pub struct ChartRegistry {
    renderers: HashMap<ChartKind, RenderFn>,
}

impl ChartRegistry {
    fn with_builtin_renderers() -> Self {
        let mut renderers: HashMap<ChartKind, RenderFn> = HashMap::new();
        renderers.insert(ChartKind::Line, render_line_chart);
        renderers.insert(ChartKind::Pie, render_pie_chart);
        Self { renderers }
    }

    pub fn renderer(&self, kind: ChartKind) -> Option<RenderFn> {
        self.renderers.get(&kind).copied()
    }

    pub fn supports(&self, kind: ChartKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

static REGISTRY: OnceCell<ChartRegistry> = OnceCell::new();

pub fn register_chart_renderers() -> &'static ChartRegistry {
    REGISTRY.get_or_init(|| {
        let registry = ChartRegistry::with_builtin_renderers();
        get_logger().info(
            LogComponent::Infrastructure("ChartRegistry"),
            &format!("🎨 Registered {} chart renderers", registry.len()),
        );
        registry
    })
}

/// `None` until [`register_chart_renderers`] has run.
pub fn chart_registry() -> Option<&'static ChartRegistry> {
    REGISTRY.get()
}
