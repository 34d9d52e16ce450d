//! Reusable Dioxus RSX components for the heatmap apps.

mod chart_container;
mod chart_header;
mod error_display;
mod heatmap;
mod loading_spinner;
mod toggle_controls;
mod tooltip;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use heatmap::HeatmapChart;
pub use loading_spinner::LoadingSpinner;
pub use toggle_controls::{ToggleButton, ToggleLabel};
pub use tooltip::Tooltip;
