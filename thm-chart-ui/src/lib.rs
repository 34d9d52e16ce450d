//! Shared Dioxus components for the temperature heatmap apps.
//!
//! This crate provides:
//! - `fetch`: runtime download of the daily CSV via `window.fetch`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `sink`: the signal-backed display surface a `ChartSession` draws into
//! - `components`: Reusable RSX components (heatmap, tooltip, toggle, etc.)

pub mod components;
pub mod fetch;
pub mod sink;
pub mod state;
