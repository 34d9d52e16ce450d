//! Chart container component.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 600)]
    pub min_height: u32,
    pub children: Element,
}

/// A container div holding the status label, the heatmap and its controls.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
            {props.children}
        }
    }
}
