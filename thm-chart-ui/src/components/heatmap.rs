//! The heatmap graphic: axes, cells, mini lines and legend.
//!
//! Draws whatever [`Scene`] is in `AppState::scene` and forwards pointer
//! events on cells to the session.

use crate::state::AppState;
use dioxus::prelude::*;
use thm_chart::format::fmt_coord;
use thm_chart::scene::{
    axis_domain_path, tick_label_offset, Axis, AxisOrient, Legend, LINE_KEY_WIDTH, TICK_SIZE,
};
use thm_chart::{Cell, Interaction, Point, Scene};

fn translate(x: f64, y: f64) -> String {
    format!("translate({},{})", fmt_coord(x), fmt_coord(y))
}

/// Renders the current scene as inline SVG, or nothing before the first draw.
#[component]
pub fn HeatmapChart() -> Element {
    let state = use_context::<AppState>();
    let scene: Option<Scene> = state.scene.read().clone();
    let Some(scene) = scene else {
        return rsx! {};
    };
    let width = fmt_coord(scene.width);
    let height = fmt_coord(scene.height);

    rsx! {
        svg {
            id: "{scene.container_id}-svg",
            width: "{width}",
            height: "{height}",
            "font-family": "sans-serif",
            "font-size": "10",
            g {
                transform: translate(scene.margin.left, scene.margin.top),
                AxisView { axis: scene.x_axis.clone() }
                AxisView { axis: scene.y_axis.clone() }
                g {
                    class: "cells",
                    for (index, cell) in scene.cells.iter().enumerate() {
                        CellView { key: "{cell.key}", index, cell: cell.clone() }
                    }
                }
                LegendView { legend: scene.legend.clone() }
            }
        }
    }
}

#[component]
fn CellView(index: usize, cell: Cell) -> Element {
    let mut state = use_context::<AppState>();
    let fill = cell.fill.map(|c| c.hex());

    rsx! {
        g {
            class: "cell",
            transform: translate(cell.rect.x, cell.rect.y),
            onmouseenter: move |evt: MouseEvent| {
                let p = evt.page_coordinates();
                state.dispatch(Interaction::Enter { cell: index, at: Point::new(p.x, p.y) });
            },
            onmousemove: move |evt: MouseEvent| {
                let p = evt.page_coordinates();
                state.dispatch(Interaction::Move { at: Point::new(p.x, p.y) });
            },
            onmouseleave: move |_: MouseEvent| {
                state.dispatch(Interaction::Leave);
            },
            rect {
                width: fmt_coord(cell.rect.width),
                height: fmt_coord(cell.rect.height),
                fill: fill,
            }
            for line in cell.lines.iter() {
                path {
                    class: "line-{line.series:?}",
                    d: "{line.d}",
                    fill: "none",
                    stroke: line.stroke.hex(),
                    "stroke-width": "1.5",
                    "pointer-events": "none",
                }
            }
        }
    }
}

#[component]
fn AxisView(axis: Axis) -> Element {
    let class = match axis.orient {
        AxisOrient::Top => "axis axis-top",
        AxisOrient::Left => "axis axis-left",
        AxisOrient::Right => "axis axis-right",
    };
    let domain = axis_domain_path(&axis);
    let text_offset = fmt_coord(tick_label_offset());
    let orient = axis.orient;

    rsx! {
        g {
            class: "{class}",
            transform: translate(axis.origin.x, axis.origin.y),
            fill: "none",
            path { class: "domain", stroke: "currentColor", d: "{domain}" }
            for tick in axis.ticks.iter() {
                {match orient {
                    AxisOrient::Top => rsx! {
                        g {
                            class: "tick",
                            transform: translate(tick.offset, 0.0),
                            line { stroke: "currentColor", y2: "-{TICK_SIZE}" }
                            text {
                                fill: "currentColor",
                                y: "-{text_offset}",
                                "text-anchor": "middle",
                                "{tick.label}"
                            }
                        }
                    },
                    AxisOrient::Left => rsx! {
                        g {
                            class: "tick",
                            transform: translate(0.0, tick.offset),
                            line { stroke: "currentColor", x2: "-{TICK_SIZE}" }
                            text {
                                fill: "currentColor",
                                x: "-{text_offset}",
                                dy: "0.32em",
                                "text-anchor": "end",
                                "{tick.label}"
                            }
                        }
                    },
                    AxisOrient::Right => rsx! {
                        g {
                            class: "tick",
                            transform: translate(0.0, tick.offset),
                            line { stroke: "currentColor", x2: "{TICK_SIZE}" }
                            text {
                                fill: "currentColor",
                                x: "{text_offset}",
                                dy: "0.32em",
                                "text-anchor": "start",
                                "{tick.label}"
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[component]
fn LegendView(legend: Legend) -> Element {
    rsx! {
        g {
            class: "legend-group",
            transform: translate(legend.origin.x, legend.origin.y),
            for swatch in legend.swatches.iter() {
                rect {
                    x: fmt_coord(swatch.rect.x),
                    y: fmt_coord(swatch.rect.y),
                    width: fmt_coord(swatch.rect.width),
                    height: fmt_coord(swatch.rect.height),
                    fill: swatch.fill.map(|c| c.hex()),
                }
            }
            AxisView { axis: legend.axis.clone() }
            for key in legend.line_keys.iter() {
                g {
                    class: "line-key",
                    transform: translate(key.at.x, key.at.y),
                    rect {
                        y: "-2",
                        width: "{LINE_KEY_WIDTH}",
                        height: "3",
                        fill: key.color.hex(),
                    }
                    text {
                        x: fmt_coord(LINE_KEY_WIDTH + 4.0),
                        dy: "0.32em",
                        "{key.label}"
                    }
                }
            }
        }
    }
}
