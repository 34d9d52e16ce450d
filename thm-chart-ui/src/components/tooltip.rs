//! The chart's floating tooltip.

use crate::state::AppState;
use dioxus::prelude::*;

/// Absolutely positioned box following the pointer while a cell is hovered.
#[component]
pub fn Tooltip() -> Element {
    let state = use_context::<AppState>();
    let tooltip = state.tooltip.read().clone();
    let display = if tooltip.visible { "block" } else { "none" };
    let style = format!(
        "position: absolute; left: {}px; top: {}px; background: white; padding: 5px; border: 1px solid black; display: {}; pointer-events: none; font-size: 12px;",
        tooltip.left, tooltip.top, display
    );
    let lines: Vec<String> = tooltip
        .content
        .map(|c| c.lines().to_vec())
        .unwrap_or_default();

    rsx! {
        div {
            class: "heatmap-tooltip",
            style: "{style}",
            for line in lines {
                div { "{line}" }
            }
        }
    }
}
