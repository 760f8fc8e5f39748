//! Pure layout math shared by the canvas renderers.

use crate::domain::chart::{LineDataset, PieChartData};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Plotting rectangle inside the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Canvas minus fixed margins for axis labels and the legend.
    pub fn for_canvas(width: f64, height: f64) -> Self {
        let left = 50.0;
        let top = 40.0;
        let right = 20.0;
        let bottom = 50.0;
        Self {
            left,
            top,
            width: (width - left - right).max(1.0),
            height: (height - top - bottom).max(1.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Vertical scale from zero to a rounded-up maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueScale {
    pub max: f64,
    pub step: f64,
}

impl ValueScale {
    pub fn from_datasets(datasets: &[LineDataset]) -> Self {
        let peak = datasets
            .iter()
            .flat_map(|dataset| dataset.data.iter().flatten())
            .copied()
            .max()
            .unwrap_or(0);
        Self::for_peak(peak as f64)
    }

    /// Smallest 1/2/5 x 10^n step that fits the peak in five ticks.
    pub fn for_peak(peak: f64) -> Self {
        let peak = peak.max(1.0);
        let raw_step = peak / 5.0;
        let magnitude = 10f64.powf(raw_step.log10().floor());
        let step = [1.0, 2.0, 5.0, 10.0]
            .iter()
            .map(|factor| factor * magnitude)
            .find(|candidate| *candidate >= raw_step)
            .unwrap_or(10.0 * magnitude)
            .max(1.0);
        Self { max: (peak / step).ceil() * step, step }
    }

    pub fn ticks(&self) -> Vec<f64> {
        let count = (self.max / self.step).round() as usize;
        (0..=count).map(|i| i as f64 * self.step).collect()
    }

    pub fn y_for(&self, value: f64, area: &PlotArea) -> f64 {
        area.bottom() - (value / self.max) * area.height
    }
}

/// X of the `index`-th of `count` evenly spaced points; a single point is centred.
pub fn x_for(index: usize, count: usize, area: &PlotArea) -> f64 {
    if count <= 1 {
        return area.left + area.width / 2.0;
    }
    area.left + area.width * index as f64 / (count - 1) as f64
}

/// Split a series into drawable runs, breaking at every gap.
pub fn line_segments(data: &[Option<u64>], scale: &ValueScale, area: &PlotArea) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for (index, value) in data.iter().enumerate() {
        match value {
            Some(value) => current.push((
                x_for(index, data.len(), area),
                scale.y_for(*value as f64, area),
            )),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Every how many labels one is drawn so that at most `max_labels` show.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
    pub color: String,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Clockwise slices starting at twelve o'clock; zero values get no slice.
pub fn pie_slices(data: &PieChartData) -> Vec<PieSlice> {
    let Some(dataset) = data.datasets.first() else {
        return Vec::new();
    };
    let total: u64 = dataset.data.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    dataset
        .data
        .iter()
        .enumerate()
        .filter(|(_, value)| **value > 0)
        .map(|(index, value)| {
            let sweep = TAU * (*value as f64) / total as f64;
            let slice = PieSlice {
                label: data.labels.get(index).cloned().unwrap_or_default(),
                value: *value,
                color: dataset.background_color.get(index).cloned().unwrap_or_default(),
                start_angle: angle,
                end_angle: angle + sweep,
            };
            angle += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> PlotArea {
        PlotArea { left: 0.0, top: 0.0, width: 100.0, height: 100.0 }
    }

    #[test]
    fn scale_rounds_up_to_nice_step() {
        let scale = ValueScale::for_peak(37.0);
        assert_eq!(scale.step, 10.0);
        assert_eq!(scale.max, 40.0);
        assert_eq!(scale.ticks(), vec![0.0, 10.0, 20.0, 30.0, 40.0]);

        let empty = ValueScale::for_peak(0.0);
        assert!(empty.max >= 1.0);
    }

    #[test]
    fn gaps_split_segments() {
        let scale = ValueScale { max: 10.0, step: 2.0 };
        let data = [Some(10), None, Some(5), Some(0), None, None];
        let segments = line_segments(&data, &scale, &area());
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], vec![(0.0, 0.0)]);
        assert_eq!(segments[1], vec![(40.0, 50.0), (60.0, 100.0)]);
    }

    #[test]
    fn all_gaps_produce_nothing() {
        let scale = ValueScale::for_peak(1.0);
        assert!(line_segments(&[None, None], &scale, &area()).is_empty());
    }

    #[test]
    fn single_point_is_centred() {
        assert_eq!(x_for(0, 1, &area()), 50.0);
    }

    #[test]
    fn stride_limits_labels() {
        assert_eq!(label_stride(5, 10), 1);
        assert_eq!(label_stride(25, 10), 3);
        assert_eq!(label_stride(0, 10), 1);
    }
}
