//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use thm_chart::{Chart, ChartConfig, ChartSession, Interaction, Outcome, Scene, TooltipView};
use thm_data::loader;

use crate::sink::SignalSink;

/// Shared application state for the heatmap apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Chart with its display mode (None until the data is loaded)
    pub session: Signal<Option<ChartSession>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Scene currently on display
    pub scene: Signal<Option<Scene>>,
    /// The chart's single tooltip
    pub tooltip: Signal<TooltipView>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            scene: Signal::new(None),
            tooltip: Signal::new(TooltipView::default()),
        }
    }

    /// Install a freshly built session and draw it.
    pub fn mount(&mut self, session: ChartSession) {
        session.mount(&mut self.sink());
        self.session.set(Some(session));
        self.loading.set(false);
    }

    /// Parse the daily CSV, build the chart and draw it.
    ///
    /// Failures land in `error_msg` and leave the chart undrawn.
    pub fn load_csv(&mut self, csv: &str, config: ChartConfig) {
        let records = match loader::parse_records(csv) {
            Ok(records) => records,
            Err(e) => {
                log::error!("Failed to parse temperature CSV: {:#}", e);
                self.fail(format!("Failed to parse temperature data: {:#}", e));
                return;
            }
        };
        if let Err(e) = config.validate() {
            self.fail(format!("Invalid chart config: {:#}", e));
            return;
        }
        let chart = Chart::new(&records, config);
        log::info!(
            "Loaded {} daily records into {}",
            records.len(),
            chart.config().container_id
        );
        self.mount(ChartSession::new(chart));
    }

    pub fn fail(&mut self, message: String) {
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    /// Route a pointer or button event through the session.
    pub fn dispatch(&mut self, interaction: Interaction) -> Outcome {
        let mut sink = self.sink();
        match self.session.write().as_mut() {
            Some(session) => session.dispatch(interaction, &mut sink),
            None => Outcome::Ignored,
        }
    }

    fn sink(&self) -> SignalSink {
        SignalSink {
            scene: self.scene,
            tooltip: self.tooltip,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
