use super::format::{TickFormat, TooltipFormat};
use super::value_objects::{ChartKind, Gradient, LegendPosition};
use serde::Serialize;

/// Declarative chart description. Serializes to the charting engine's JSON
/// configuration; callbacks and gradients are carried alongside in skipped
/// fields and installed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
    #[serde(skip)]
    pub tooltip: TooltipFormat,
    #[serde(skip)]
    pub y_ticks: Option<TickFormat>,
}

impl ChartSpec {
    /// `(label, value)` pairs of the first dataset, in order.
    pub fn points(&self) -> Vec<(&str, f64)> {
        let values = self.data.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[]);
        self.data.labels.iter().map(String::as_str).zip(values.iter().copied()).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Either one color for every element or one color per element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    Each(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Paint,
    pub border_color: Paint,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
    /// Replaces `background_color` once a drawing context is available.
    #[serde(skip)]
    pub gradient: Option<Gradient>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: TooltipStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub position: LegendPosition,
    pub labels: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipStyle {
    pub background_color: String,
    pub padding: u32,
    pub display_colors: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub ticks: TextStyle,
    pub grid: GridStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridStyle {
    pub display: bool,
    pub color: String,
}
