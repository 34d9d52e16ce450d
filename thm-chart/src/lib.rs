//! Render core for the daily temperature heatmaps.
//!
//! This crate provides:
//! - `scale` / `color`: band, linear and sequential color scales
//! - `render`: the parameterised [`Chart`] producing a declarative [`Scene`]
//! - `state` / `sink`: display mode and tooltip state, and the
//!   [`InteractionSink`] a display adapter implements
//! - `svg`: a static SVG adapter for scenes
//!
//! Nothing here touches a live display. Adapters (the Dioxus components in
//! `thm-chart-ui`, the writer in [`svg`]) bind scenes to an
//! environment.

pub mod color;
pub mod config;
pub mod curve;
pub mod format;
pub mod render;
pub mod scale;
pub mod scene;
pub mod sink;
pub mod state;
pub mod svg;

pub use config::{CellMetric, ChartConfig, Layout, Margin};
pub use render::Chart;
pub use scene::{Cell, Scene, TooltipContent};
pub use sink::{ChartSession, InteractionSink};
pub use state::{ChartState, DisplayMode, Interaction, Outcome, Point, TooltipView};
