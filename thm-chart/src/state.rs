//! Interaction state: display mode and tooltip.
//!
//! State lives in an explicit [`ChartState`] value. Interactions are applied
//! to it and the chart is re-rendered from it; nothing is captured in
//! closures.

use crate::scene::{Scene, TooltipContent};
use serde::{Deserialize, Serialize};

/// Tooltip offset from the pointer, in page pixels.
pub const TOOLTIP_OFFSET: Point = Point { x: 10.0, y: -10.0 };

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Which monthly extreme colors the cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Max,
    Min,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Max => DisplayMode::Min,
            DisplayMode::Min => DisplayMode::Max,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DisplayMode::Max => "Max",
            DisplayMode::Min => "Min",
        }
    }

    pub fn status_text(self) -> String {
        format!("Currently showing: {} Temperature", self.name())
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max" => Ok(DisplayMode::Max),
            "min" => Ok(DisplayMode::Min),
            other => anyhow::bail!("unknown display mode `{}` (expected max or min)", other),
        }
    }
}

/// The single tooltip of a chart instance, mutated in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TooltipView {
    pub visible: bool,
    /// Page position of the tooltip's top-left corner.
    pub left: f64,
    pub top: f64,
    pub content: Option<TooltipContent>,
}

impl TooltipView {
    pub fn show(&mut self, content: TooltipContent, pointer: Point) {
        self.visible = true;
        self.content = Some(content);
        self.follow(pointer);
    }

    pub fn follow(&mut self, pointer: Point) {
        self.left = pointer.x + TOOLTIP_OFFSET.x;
        self.top = pointer.y + TOOLTIP_OFFSET.y;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// A user action on a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    /// Pointer entered the cell at this index of [`Scene::cells`].
    Enter { cell: usize, at: Point },
    /// Pointer moved within the hovered cell.
    Move { at: Point },
    Leave,
    /// Toggle button clicked.
    Toggle,
}

/// What an applied interaction requires of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Cells and legend must be redrawn.
    Redraw,
    TooltipShown,
    TooltipMoved,
    TooltipHidden,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartState {
    pub mode: DisplayMode,
    pub tooltip: TooltipView,
}

impl ChartState {
    pub fn new(mode: DisplayMode) -> Self {
        ChartState {
            mode,
            tooltip: TooltipView::default(),
        }
    }

    /// Apply an interaction against the scene currently on display.
    pub fn apply(&mut self, interaction: Interaction, scene: &Scene) -> Outcome {
        match interaction {
            Interaction::Enter { cell, at } => match scene.cells.get(cell) {
                Some(cell) => {
                    self.tooltip.show(cell.tooltip.clone(), at);
                    Outcome::TooltipShown
                }
                None => Outcome::Ignored,
            },
            Interaction::Move { at } if self.tooltip.visible => {
                self.tooltip.follow(at);
                Outcome::TooltipMoved
            }
            Interaction::Move { .. } => Outcome::Ignored,
            Interaction::Leave if self.tooltip.visible => {
                self.tooltip.hide();
                Outcome::TooltipHidden
            }
            Interaction::Leave => Outcome::Ignored,
            Interaction::Toggle if scene.controls.is_some() => {
                self.mode = self.mode.toggled();
                Outcome::Redraw
            }
            Interaction::Toggle => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles_and_labels() {
        assert_eq!(DisplayMode::Max.toggled(), DisplayMode::Min);
        assert_eq!(DisplayMode::Max.toggled().toggled(), DisplayMode::Max);
        assert_eq!(DisplayMode::Max.status_text(), "Currently showing: Max Temperature");
        assert_eq!(DisplayMode::Min.status_text(), "Currently showing: Min Temperature");
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("MAX".parse::<DisplayMode>().unwrap(), DisplayMode::Max);
        assert_eq!("min".parse::<DisplayMode>().unwrap(), DisplayMode::Min);
        assert!("mean".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn tooltip_offsets_from_pointer() {
        let mut tooltip = TooltipView::default();
        let content = TooltipContent {
            label: "2020-1".to_string(),
            max: 15.0,
            min: -1.0,
        };
        tooltip.show(content.clone(), Point::new(100.0, 200.0));
        assert!(tooltip.visible);
        assert_eq!((tooltip.left, tooltip.top), (110.0, 190.0));
        tooltip.follow(Point::new(120.0, 220.0));
        assert_eq!((tooltip.left, tooltip.top), (130.0, 210.0));
        tooltip.hide();
        assert!(!tooltip.visible);
        assert_eq!(tooltip.content, Some(content));
    }
}
