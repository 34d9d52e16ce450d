//! Monthly Temperature Heatmap with Daily Lines
//!
//! Covers the ten most recent years. Each (year, month) cell is colored by
//! the mean of its daily maxima and carries two small line charts of the
//! daily max and min across the month. Months without data are left blank.

use dioxus::prelude::*;
use thm_chart::ChartConfig;
use thm_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, HeatmapChart, LoadingSpinner, Tooltip,
};
use thm_chart_ui::fetch;
use thm_chart_ui::state::AppState;

const TEMPERATURE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/temperature_daily.csv"));

const TEMPERATURE_CSV_URL: &str = "./temperature_daily.csv";

const CHART_ID: &str = "chart-2";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("monthly-lines-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        spawn(async move {
            let csv = if TEMPERATURE_CSV.trim().is_empty() {
                match fetch::fetch_csv(TEMPERATURE_CSV_URL).await {
                    Ok(csv) => csv,
                    Err(e) => {
                        log::error!("Failed to fetch temperature data: {}", e);
                        state.fail(format!("Failed to fetch temperature data: {}", e));
                        return;
                    }
                }
            } else {
                TEMPERATURE_CSV.to_string()
            };
            state.load_csv(&csv, ChartConfig::monthly_lines(CHART_ID));
        });
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Daily Temperatures, Last Ten Years".to_string(),
                color_description: "mean of the month's daily max, in °C; lines trace each day's max and min".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ChartContainer {
                    id: CHART_ID.to_string(),
                    HeatmapChart {}
                }
                Tooltip {}
            }
        }
    }
}
