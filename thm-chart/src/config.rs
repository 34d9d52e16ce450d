//! Chart configuration.
//!
//! Both heatmaps are the same [`crate::Chart`] driven by a `ChartConfig`;
//! the presets below reproduce the two charts. Configs deserialize from
//! JSON with every field optional, falling back to the max/min preset.

use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Which per-month value colors a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellMetric {
    /// Monthly max or min, chosen by the display mode.
    Extremes,
    /// Mean of the daily max temperatures.
    MeanMax,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Logical canvas size. The rendered SVG is `width + legend_gutter` wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub legend_gutter: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            width: 1000.0,
            height: 600.0,
            margin: Margin {
                top: 50.0,
                right: 100.0,
                bottom: 50.0,
                left: 80.0,
            },
            legend_gutter: 100.0,
        }
    }
}

impl Layout {
    /// Width of the cell grid.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the cell grid.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn outer_width(&self) -> f64 {
        self.width + self.legend_gutter
    }

    pub fn outer_height(&self) -> f64 {
        self.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// DOM id of the element the chart mounts into.
    pub container_id: String,
    pub metric: CellMetric,
    /// Whether the max/min toggle button and status label are shown.
    pub show_toggle: bool,
    /// Whether each cell carries daily max/min lines.
    pub show_mini_lines: bool,
    /// Restrict the year axis to the N most recent years.
    pub year_window: Option<usize>,
    /// Gutter between bands, as a fraction of the band step.
    pub padding: f64,
    pub layout: Layout,
    pub legend_swatches: usize,
    pub legend_ticks: usize,
    /// Pixel height of the legend scale.
    pub legend_height: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig::monthly_extremes("chart-1")
    }
}

impl ChartConfig {
    /// Max/min heatmap over every year, with the toggle control.
    pub fn monthly_extremes(container_id: &str) -> Self {
        ChartConfig {
            container_id: container_id.to_string(),
            metric: CellMetric::Extremes,
            show_toggle: true,
            show_mini_lines: false,
            year_window: None,
            padding: 0.05,
            layout: Layout::default(),
            legend_swatches: 10,
            legend_ticks: 5,
            legend_height: 100.0,
        }
    }

    /// Mean-max heatmap over the last ten years with daily lines per cell.
    pub fn monthly_lines(container_id: &str) -> Self {
        ChartConfig {
            container_id: container_id.to_string(),
            metric: CellMetric::MeanMax,
            show_toggle: false,
            show_mini_lines: true,
            year_window: Some(10),
            ..ChartConfig::monthly_extremes(container_id)
        }
    }

    /// Parse a JSON config and check it.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: ChartConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (0.0..1.0).contains(&self.padding),
            "padding must be in [0, 1), got {}",
            self.padding
        );
        ensure!(
            self.layout.inner_width() > 0.0 && self.layout.inner_height() > 0.0,
            "layout margins leave no room for the grid"
        );
        ensure!(self.legend_swatches > 0, "legend needs at least one swatch");
        ensure!(self.year_window != Some(0), "year window must not be empty");
        ensure!(
            !self.show_toggle || self.metric == CellMetric::Extremes,
            "the max/min toggle only applies to the extremes metric"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_sizes() {
        let layout = Layout::default();
        assert_eq!(layout.inner_width(), 820.0);
        assert_eq!(layout.inner_height(), 500.0);
        assert_eq!(layout.outer_width(), 1100.0);
        assert_eq!(layout.outer_height(), 600.0);
    }

    #[test]
    fn presets_are_valid() {
        assert!(ChartConfig::monthly_extremes("chart-1").validate().is_ok());
        let lines = ChartConfig::monthly_lines("chart-2");
        assert!(lines.validate().is_ok());
        assert_eq!(lines.container_id, "chart-2");
        assert_eq!(lines.year_window, Some(10));
        assert!(lines.show_mini_lines);
        assert!(!lines.show_toggle);
    }

    #[test]
    fn from_json_fills_defaults() {
        let config = ChartConfig::from_json(r#"{"container_id":"heat","padding":0.1}"#).unwrap();
        assert_eq!(config.container_id, "heat");
        assert_eq!(config.padding, 0.1);
        assert_eq!(config.metric, CellMetric::Extremes);
        assert_eq!(config.layout, Layout::default());
    }

    #[test]
    fn from_json_parses_metric() {
        let config = ChartConfig::from_json(
            r#"{"metric":"mean_max","show_toggle":false,"year_window":3}"#,
        )
        .unwrap();
        assert_eq!(config.metric, CellMetric::MeanMax);
        assert_eq!(config.year_window, Some(3));
    }

    #[test]
    fn from_json_rejects_bad_values() {
        assert!(ChartConfig::from_json(r#"{"padding":1.5}"#).is_err());
        assert!(ChartConfig::from_json(r#"{"metric":"mean_max"}"#).is_err());
        assert!(ChartConfig::from_json("not json").is_err());
    }
}
