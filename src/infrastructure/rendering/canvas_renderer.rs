use super::layout::{PlotArea, ValueScale, label_stride, line_segments, pie_slices, x_for};
use super::registry::chart_registry;
use crate::domain::{
    chart::{ChartConfig, Color, LineChartData, PieChartData},
    errors::{AppError, RenderingResult},
    logging::{LogComponent, get_logger},
};
use std::f64::consts::TAU;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const MAX_X_LABELS: usize = 6;

/// Canvas 2D renderer - draws a `ChartConfig` through the registered renderers
pub struct CanvasRenderer;

impl CanvasRenderer {
    pub fn render(canvas: &HtmlCanvasElement, chart: &ChartConfig) -> RenderingResult<()> {
        let registry = chart_registry().ok_or_else(|| {
            AppError::RenderingError("chart renderers are not registered".to_string())
        })?;
        let render = registry.renderer(chart.kind()).ok_or_else(|| {
            AppError::RenderingError(format!("no renderer registered for {} charts", chart.kind()))
        })?;

        let context = Self::context_2d(canvas)?;
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;

        render(&context, chart, width, height)
            .map_err(|e| AppError::RenderingError(format!("{} chart: {:?}", chart.kind(), e)))?;

        get_logger().trace(
            LogComponent::Infrastructure("CanvasRenderer"),
            &format!("Rendered {} chart at {}x{}", chart.kind(), width, height),
        );
        Ok(())
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> RenderingResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(|_| AppError::RenderingError("Failed to get 2D context".to_string()))?
            .ok_or_else(|| AppError::RenderingError("2D context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| AppError::RenderingError("Failed to cast to 2D context".to_string()))
    }
}

fn clear(context: &CanvasRenderingContext2d, width: f64, height: f64) {
    context.clear_rect(0.0, 0.0, width, height);
    context.set_fill_style_str(&Color::BACKGROUND.to_css());
    context.fill_rect(0.0, 0.0, width, height);
}

fn placeholder(context: &CanvasRenderingContext2d, width: f64, height: f64, text: &str) -> Result<(), JsValue> {
    context.set_fill_style_str(&Color::TEXT.to_css());
    context.set_font("16px sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.fill_text(text, width / 2.0, height / 2.0)
}

/// Registered renderer for `ChartConfig::Line`.
pub fn render_line_chart(
    context: &CanvasRenderingContext2d,
    chart: &ChartConfig,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    let ChartConfig::Line(data) = chart else {
        return Err(JsValue::from_str("line renderer received a non-line chart"));
    };

    clear(context, width, height);
    if data.labels.is_empty() {
        return placeholder(context, width, height, "No scores yet");
    }

    let area = PlotArea::for_canvas(width, height);
    let scale = ValueScale::from_datasets(&data.datasets);

    draw_value_axis(context, &area, &scale)?;
    draw_time_axis(context, &area, data)?;

    for dataset in &data.datasets {
        context.set_stroke_style_str(&dataset.border_color);
        context.set_fill_style_str(&dataset.border_color);
        context.set_line_width(dataset.border_width);

        for segment in line_segments(&dataset.data, &scale, &area) {
            context.begin_path();
            for (i, (x, y)) in segment.iter().enumerate() {
                if i == 0 {
                    context.move_to(*x, *y);
                } else {
                    context.line_to(*x, *y);
                }
            }
            context.stroke();

            for (x, y) in &segment {
                context.begin_path();
                context.arc(*x, *y, dataset.point_radius, 0.0, TAU)?;
                context.fill();
            }
        }
    }

    draw_legend(
        context,
        &area,
        data.datasets.iter().map(|d| (d.label.as_str(), d.border_color.as_str())),
    )
}

fn draw_value_axis(context: &CanvasRenderingContext2d, area: &PlotArea, scale: &ValueScale) -> Result<(), JsValue> {
    context.set_stroke_style_str(&Color::GRID.to_css());
    context.set_fill_style_str(&Color::TEXT.to_css());
    context.set_line_width(1.0);
    context.set_font("11px sans-serif");
    context.set_text_align("right");
    context.set_text_baseline("middle");

    for tick in scale.ticks() {
        let y = scale.y_for(tick, area);
        context.begin_path();
        context.move_to(area.left, y);
        context.line_to(area.right(), y);
        context.stroke();
        context.fill_text(&format!("{}", tick), area.left - 6.0, y)?;
    }
    Ok(())
}

fn draw_time_axis(context: &CanvasRenderingContext2d, area: &PlotArea, data: &LineChartData) -> Result<(), JsValue> {
    context.set_fill_style_str(&Color::TEXT.to_css());
    context.set_font("10px sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("top");

    let count = data.labels.len();
    let stride = label_stride(count, MAX_X_LABELS);
    for (index, label) in data.labels.iter().enumerate().step_by(stride) {
        // date on one line, time on the next
        let x = x_for(index, count, area);
        let (date, time) = label.split_once(' ').unwrap_or((label.as_str(), ""));
        context.fill_text(date, x, area.bottom() + 6.0)?;
        context.fill_text(time, x, area.bottom() + 20.0)?;
    }
    Ok(())
}

fn draw_legend<'a>(
    context: &CanvasRenderingContext2d,
    area: &PlotArea,
    entries: impl Iterator<Item = (&'a str, &'a str)>,
) -> Result<(), JsValue> {
    context.set_font("12px sans-serif");
    context.set_text_align("left");
    context.set_text_baseline("middle");

    let mut x = area.left;
    let y = area.top / 2.0;
    for (label, color) in entries {
        context.set_fill_style_str(color);
        context.fill_rect(x, y - 6.0, 24.0, 12.0);
        context.set_fill_style_str(&Color::TEXT.to_css());
        context.fill_text(label, x + 30.0, y)?;
        x += 40.0 + label.len() as f64 * 8.0;
    }
    Ok(())
}

/// Registered renderer for `ChartConfig::Pie`.
pub fn render_pie_chart(
    context: &CanvasRenderingContext2d,
    chart: &ChartConfig,
    width: f64,
    height: f64,
) -> Result<(), JsValue> {
    let ChartConfig::Pie(data) = chart else {
        return Err(JsValue::from_str("pie renderer received a non-pie chart"));
    };

    clear(context, width, height);
    let slices = pie_slices(data);
    if slices.is_empty() {
        return placeholder(context, width, height, "No data in range");
    }

    let cx = width / 2.0;
    let cy = height / 2.0 + 10.0;
    let radius = (width.min(height) / 2.0 - 40.0).max(10.0);

    for slice in &slices {
        context.set_fill_style_str(&slice.color);
        context.begin_path();
        context.move_to(cx, cy);
        context.arc(cx, cy, radius, slice.start_angle, slice.end_angle)?;
        context.close_path();
        context.fill();
    }

    draw_pie_legend(context, width, data)
}

fn draw_pie_legend(context: &CanvasRenderingContext2d, width: f64, data: &PieChartData) -> Result<(), JsValue> {
    let colors = data
        .datasets
        .first()
        .map(|dataset| dataset.background_color.as_slice())
        .unwrap_or(&[]);
    let area = PlotArea { left: width / 4.0, top: 40.0, width: width / 2.0, height: 0.0 };
    draw_legend(
        context,
        &area,
        data.labels
            .iter()
            .zip(colors.iter())
            .map(|(label, color)| (label.as_str(), color.as_str())),
    )
}
