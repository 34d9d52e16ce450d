//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Source the app tried to load, shown under the message
    #[props(default = String::new())]
    pub source: String,
}

/// Displays a load failure in a styled box. No chart is drawn alongside it.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
            if !props.source.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px;",
                    "While loading {props.source}"
                }
            }
        }
    }
}
