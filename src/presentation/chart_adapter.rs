//! Maps aggregation output onto chart data and display strings.

use crate::domain::{
    chart::{ChartConfig, Color, LineChartData, LineDataset, PieChartData, PieDataset},
    scores::{AggregateTotals, ScoreRecord, ScoreSeries},
};
use crate::time_utils::format_display_timestamp;

pub const FUN_LABEL: &str = "Fun";
pub const TIRED_LABEL: &str = "Tired";

fn line_dataset(label: &str, color: Color, data: &[Option<u64>]) -> LineDataset {
    LineDataset {
        label: label.to_string(),
        data: data.to_vec(),
        border_color: color.to_css(),
        background_color: color.with_alpha(0.5).to_css(),
        span_gaps: false,
        border_width: 2.0,
        point_radius: 3.0,
    }
}

pub fn line_chart_data(series: &ScoreSeries) -> LineChartData {
    LineChartData {
        labels: series.timestamps.iter().copied().map(format_display_timestamp).collect(),
        datasets: vec![
            line_dataset(FUN_LABEL, Color::FUN, &series.fun),
            line_dataset(TIRED_LABEL, Color::TIRED, &series.tired),
        ],
    }
}

pub fn pie_chart_data(totals: &AggregateTotals) -> PieChartData {
    PieChartData {
        labels: vec![FUN_LABEL.to_string(), TIRED_LABEL.to_string()],
        datasets: vec![PieDataset {
            label: "Totals".to_string(),
            data: vec![totals.fun, totals.tired],
            background_color: vec![
                Color::FUN.with_alpha(0.8).to_css(),
                Color::TIRED.with_alpha(0.8).to_css(),
            ],
        }],
    }
}

pub fn line_chart(series: &ScoreSeries) -> ChartConfig {
    ChartConfig::Line(line_chart_data(series))
}

pub fn pie_chart(totals: &AggregateTotals) -> ChartConfig {
    ChartConfig::Pie(pie_chart_data(totals))
}

/// One row of the "latest records" table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: i64,
    pub created_at: String,
    pub score: i64,
    pub bucket: &'static str,
}

pub fn record_row(record: &ScoreRecord) -> RecordRow {
    RecordRow {
        id: record.id,
        created_at: format_display_timestamp(record.created_at),
        score: record.score,
        bucket: if record.score >= 0 { FUN_LABEL } else { TIRED_LABEL },
    }
}

/// `"75.0%"`, or `-` when both totals are zero.
pub fn format_percent(percent: Option<f64>) -> String {
    percent.map_or_else(|| "-".to_string(), |value| format!("{:.1}%", value))
}
