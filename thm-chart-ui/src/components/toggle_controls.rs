//! Status label and Max/Min toggle button.
//!
//! Both render nothing for charts without a toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use thm_chart::Interaction;

/// "Currently showing: ..." label, drawn above the toggle button.
#[component]
pub fn ToggleLabel() -> Element {
    let state = use_context::<AppState>();
    let status = state
        .scene
        .read()
        .as_ref()
        .and_then(|s| s.controls.as_ref().map(|c| c.status.clone()));

    rsx! {
        if let Some(status) = status {
            div {
                id: "toggle-label",
                style: "margin-bottom: 10px; font-size: 16px; font-weight: bold;",
                "{status}"
            }
        }
    }
}

/// Button flipping the cells between monthly max and monthly min.
#[component]
pub fn ToggleButton() -> Element {
    let mut state = use_context::<AppState>();
    let caption = state
        .scene
        .read()
        .as_ref()
        .and_then(|s| s.controls.as_ref().map(|c| c.button.clone()));

    let on_click = move |_: MouseEvent| {
        state.dispatch(Interaction::Toggle);
    };

    rsx! {
        if let Some(caption) = caption {
            button {
                style: "margin-bottom: 8px;",
                onclick: on_click,
                "{caption}"
            }
        }
    }
}
