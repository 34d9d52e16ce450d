//! Monthly Max/Min Temperature Heatmap
//!
//! One cell per (year, month) with data, colored by that month's highest
//! daily max or lowest daily min. A button flips between the two; hovering
//! a cell shows its extremes.
//!
//! Data flow:
//! 1. `build.rs` copies `temperature_daily.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary. If the fixture was
//!    missing at build time the CSV is fetched next to the page instead.
//! 3. On mount, the CSV is parsed and aggregated into a `ChartSession`,
//!    which draws into the `AppState` signals.

use dioxus::prelude::*;
use thm_chart::ChartConfig;
use thm_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, HeatmapChart, LoadingSpinner, ToggleButton,
    ToggleLabel, Tooltip,
};
use thm_chart_ui::fetch;
use thm_chart_ui::state::AppState;

/// Daily temperatures embedded at build time (empty if no fixture).
const TEMPERATURE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/temperature_daily.csv"));

/// Runtime fallback served alongside the WASM.
const TEMPERATURE_CSV_URL: &str = "./temperature_daily.csv";

/// Chart container DOM element ID.
const CHART_ID: &str = "chart-1";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("monthly-extremes-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        spawn(async move {
            if !TEMPERATURE_CSV.trim().is_empty() {
                state.load_csv(TEMPERATURE_CSV, ChartConfig::monthly_extremes(CHART_ID));
                return;
            }
            match fetch::fetch_csv(TEMPERATURE_CSV_URL).await {
                Ok(csv) => state.load_csv(&csv, ChartConfig::monthly_extremes(CHART_ID)),
                Err(e) => {
                    log::error!("Failed to fetch temperature data: {}", e);
                    state.fail(format!("Failed to fetch temperature data: {}", e));
                }
            }
        });
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Monthly Temperature Extremes".to_string(),
                color_description: "highest daily max or lowest daily min of the month, in °C".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err, source: TEMPERATURE_CSV_URL.to_string() }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartContainer {
                    id: CHART_ID.to_string(),
                    ToggleLabel {}
                    ToggleButton {}
                    HeatmapChart {}
                }
                Tooltip {}
            }
        }
    }
}
