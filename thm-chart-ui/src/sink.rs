//! Signal-backed display surface.

use dioxus::prelude::*;
use thm_chart::{InteractionSink, Scene, TooltipView};

/// Pushes session updates into the signals the components read.
pub struct SignalSink {
    pub scene: Signal<Option<Scene>>,
    pub tooltip: Signal<TooltipView>,
}

impl InteractionSink for SignalSink {
    fn redraw(&mut self, scene: &Scene) {
        self.scene.set(Some(scene.clone()));
    }

    fn show_tooltip(&mut self, tooltip: &TooltipView) {
        self.tooltip.set(tooltip.clone());
    }

    fn move_tooltip(&mut self, tooltip: &TooltipView) {
        let mut current = self.tooltip.write();
        current.left = tooltip.left;
        current.top = tooltip.top;
    }

    fn hide_tooltip(&mut self) {
        self.tooltip.write().hide();
    }
}
