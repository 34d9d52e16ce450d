//! Binding between the render core and a display surface.

use crate::render::Chart;
use crate::scene::Scene;
use crate::state::{ChartState, DisplayMode, Interaction, Outcome, TooltipView};

/// What a display surface must be able to do for a chart.
///
/// The browser components implement this over reactive signals; tests
/// implement it by recording calls.
pub trait InteractionSink {
    /// Replace the drawn cells, legend and status label with `scene`.
    fn redraw(&mut self, scene: &Scene);
    fn show_tooltip(&mut self, tooltip: &TooltipView);
    fn move_tooltip(&mut self, tooltip: &TooltipView);
    fn hide_tooltip(&mut self);
}

/// A chart together with its live state and the scene on display.
#[derive(Debug, Clone)]
pub struct ChartSession {
    chart: Chart,
    state: ChartState,
    scene: Scene,
}

impl ChartSession {
    pub fn new(chart: Chart) -> Self {
        Self::with_mode(chart, DisplayMode::default())
    }

    pub fn with_mode(chart: Chart, mode: DisplayMode) -> Self {
        let state = ChartState::new(mode);
        let scene = chart.render(&state);
        ChartSession {
            chart,
            state,
            scene,
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Initial draw.
    pub fn mount<S: InteractionSink>(&self, sink: &mut S) {
        sink.redraw(&self.scene);
    }

    /// Apply an interaction and push its effect to the sink.
    pub fn dispatch<S: InteractionSink>(&mut self, interaction: Interaction, sink: &mut S) -> Outcome {
        let outcome = self.state.apply(interaction, &self.scene);
        match outcome {
            Outcome::Redraw => {
                self.scene = self.chart.render(&self.state);
                log::info!(
                    "chart {}: switched to {} temperature",
                    self.scene.container_id,
                    self.state.mode.name()
                );
                sink.redraw(&self.scene);
            }
            Outcome::TooltipShown => sink.show_tooltip(&self.state.tooltip),
            Outcome::TooltipMoved => sink.move_tooltip(&self.state.tooltip),
            Outcome::TooltipHidden => sink.hide_tooltip(),
            Outcome::Ignored => {}
        }
        outcome
    }
}
