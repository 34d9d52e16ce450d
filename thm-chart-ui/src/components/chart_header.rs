//! Chart header component with title and cell color explanation.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// What a cell's color encodes (e.g., "Monthly mean of daily max")
    #[props(default = String::new())]
    pub color_description: String,
}

/// Header for chart sections showing title and optional color description.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.color_description.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Cell color: {props.color_description}"
                }
            }
        }
    }
}
