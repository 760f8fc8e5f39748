use derive_more::Display;
use strum::{AsRefStr, EnumIter, EnumString};

/// Value Object - Chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr)]
pub enum ChartKind {
    #[display(fmt = "Line")]
    #[strum(serialize = "line")]
    Line,
    #[display(fmt = "Pie")]
    #[strum(serialize = "pie")]
    Pie,
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// CSS `rgba(...)` form understood by both canvas and chart configs.
    pub fn to_css(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            (self.a.clamp(0.0, 1.0) * 100.0).round() / 100.0
        )
    }

    /// Fun line / slice
    pub const FUN: Color = Color { r: 54.0 / 255.0, g: 162.0 / 255.0, b: 235.0 / 255.0, a: 1.0 };
    /// Tired line / slice
    pub const TIRED: Color = Color { r: 1.0, g: 99.0 / 255.0, b: 132.0 / 255.0, a: 1.0 };
    pub const GRID: Color = Color { r: 0.29, g: 0.36, b: 0.45, a: 1.0 };
    pub const TEXT: Color = Color { r: 0.88, g: 0.88, b: 0.88, a: 1.0 };
    pub const BACKGROUND: Color = Color { r: 0.17, g: 0.24, b: 0.31, a: 1.0 };
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}
