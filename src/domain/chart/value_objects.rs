use derive_more::Display;
use serde::Serialize;
use strum::{AsRefStr, EnumString};

/// Value Object - chart kind understood by the charting engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[display(fmt = "Bar")]
    #[strum(serialize = "bar")]
    Bar,
    #[display(fmt = "Doughnut")]
    #[strum(serialize = "doughnut")]
    Doughnut,
}

/// Value Object - legend placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    #[strum(serialize = "top")]
    Top,
    #[strum(serialize = "bottom")]
    Bottom,
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
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self { a: alpha, ..*self }
    }

    /// CSS `rgba(...)` string as consumed by canvas and the charting engine.
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
}

/// Value Object - top-to-bottom linear fill. Needs a drawing context, so it is
/// resolved by the engine rather than serialized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub top: Color,
    pub bottom: Color,
}

/// Fixed presentation constants.
pub mod palette {
    use super::Color;

    pub const STABLECOIN_GREEN: u32 = 0x26A17B;
    pub const MARKET_BLUE: u32 = 0x627EEA;
    pub const TEXT: u32 = 0xE0E6ED;
    pub const GRID: u32 = 0xFFFFFF;
    pub const TOOLTIP_BG: u32 = 0x0F172A;

    pub const BAR_RADIUS: u32 = 8;
    pub const DOUGHNUT_CUTOUT: &str = "65%";
    pub const DOUGHNUT_HOVER_OFFSET: u32 = 12;
    pub const TOOLTIP_PADDING: u32 = 12;

    pub fn bar_gradient() -> super::Gradient {
        super::Gradient {
            top: Color::from_hex(STABLECOIN_GREEN),
            bottom: Color::from_hex(STABLECOIN_GREEN).with_alpha(0.25),
        }
    }

    pub fn grid() -> Color {
        Color::from_hex(GRID).with_alpha(0.08)
    }
}
