//! Declarative description of a rendered chart.
//!
//! Coordinates are in the grid's space: `(0, 0)` is the top-left corner of
//! the cell area, already offset by the layout margins. Line paths inside a
//! cell are local to that cell.

use crate::color::Rgb;
use crate::config::Margin;
use crate::format::{fmt_coord, format_temperature};
use crate::state::Point;
use serde::Serialize;
use thm_data::MonthKey;

/// Length of an axis tick mark.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark and its label.
pub const TICK_PADDING: f64 = 3.0;
/// Width of the color bar in front of a line key label.
pub const LINE_KEY_WIDTH: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrient {
    Top,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Offset along the axis from its origin.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub orient: AxisOrient,
    pub origin: Point,
    /// Extent of the axis line along its direction.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// Path data of the axis line with its end ticks, relative to the origin.
pub fn axis_domain_path(axis: &Axis) -> String {
    let (r0, r1) = (fmt_coord(axis.range.0), fmt_coord(axis.range.1));
    match axis.orient {
        AxisOrient::Top => format!("M{r0},-{TICK_SIZE}V0H{r1}V-{TICK_SIZE}"),
        AxisOrient::Left => format!("M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}"),
        AxisOrient::Right => format!("M{TICK_SIZE},{r0}H0V{r1}H{TICK_SIZE}"),
    }
}

/// Distance from the axis line to the start of a tick label.
pub fn tick_label_offset() -> f64 {
    TICK_SIZE + TICK_PADDING
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Series {
    DailyMax,
    DailyMin,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePath {
    pub series: Series,
    pub stroke: Rgb,
    /// SVG path data in cell-local coordinates.
    pub d: String,
}

/// What the tooltip shows for a cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipContent {
    /// `YYYY-M`
    pub label: String,
    pub max: f64,
    pub min: f64,
}

impl TooltipContent {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Date: {}", self.label),
            format!("Max Temp: {}°C", format_temperature(self.max)),
            format!("Min Temp: {}°C", format_temperature(self.min)),
        ]
    }
}

/// One `(year, month)` grid cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub key: MonthKey,
    pub rect: Rect,
    /// `None` when the driving value is `NaN`.
    pub fill: Option<Rgb>,
    /// The temperature the fill was derived from.
    pub value: f64,
    pub lines: Vec<LinePath>,
    pub tooltip: TooltipContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swatch {
    pub value: f64,
    pub rect: Rect,
    pub fill: Option<Rgb>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineKey {
    pub label: String,
    pub color: Rgb,
    /// Position relative to the legend origin.
    pub at: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub origin: Point,
    pub swatches: Vec<Swatch>,
    /// Tick axis, relative to the legend origin.
    pub axis: Axis,
    pub line_keys: Vec<LineKey>,
}

/// Status label and toggle button shown above the graphic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Controls {
    pub status: String,
    pub button: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub container_id: String,
    pub width: f64,
    pub height: f64,
    /// Offset of the grid space inside the canvas.
    pub margin: Margin,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub cells: Vec<Cell>,
    pub legend: Legend,
    pub controls: Option<Controls>,
}

impl Scene {
    pub fn cell(&self, key: MonthKey) -> Option<&Cell> {
        self.cells.iter().find(|c| c.key == key)
    }
}
