use super::value_objects::ChartKind;
use serde::Serialize;

/// One line of a line chart. `None` entries serialize to `null` and are
/// drawn as gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<Option<u64>>,
    pub border_color: String,
    pub background_color: String,
    pub span_gaps: bool,
    pub border_width: f64,
    pub point_radius: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LineChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieDataset {
    pub label: String,
    pub data: Vec<u64>,
    pub background_color: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PieChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<PieDataset>,
}

/// Everything a chart renderer can be asked to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ChartConfig {
    Line(LineChartData),
    Pie(PieChartData),
}

impl ChartConfig {
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartConfig::Line(_) => ChartKind::Line,
            ChartConfig::Pie(_) => ChartKind::Pie,
        }
    }
}
