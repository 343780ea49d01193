//! Traversal tab state.

use rdsviz::animation::recipes;
use rdsviz::{SequenceEvent, Sequencer, TraversalModel, TraversalOrder, VizPalette};
use tracing::info;

use super::{AnimatedWidget, ignore_busy};

#[derive(Debug, Default)]
pub struct TraversalState {
    model: TraversalModel,
    sequencer: Sequencer,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(&self) -> &TraversalModel {
        &self.model
    }

    /// Values visited so far in the current walk.
    pub fn visited_values(&self) -> Vec<i64> {
        let values = self.model.result_values();
        match self.model.current_step() {
            Some(step) => values.into_iter().take(step + 1).collect(),
            None => Vec::new(),
        }
    }

    pub fn set_order(&mut self, order: TraversalOrder) {
        if self.is_busy() {
            return ignore_busy(self.name(), "switch order");
        }
        if self.model.order() != order {
            self.model.set_order(order);
            self.reset();
        }
    }

    pub fn start(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "start");
        }
        let order = self.model.begin();
        info!(order = self.model.order().label(), nodes = order.len(), "traversal started");
        self.begin(recipes::traversal(&order, palette));
    }

    /// Clears the colouring and the visited list.
    pub fn reset(&mut self) {
        if self.is_busy() {
            return ignore_busy(self.name(), "reset");
        }
        self.model.reset();
        self.sequencer.clear_overlay();
    }
}

impl AnimatedWidget for TraversalState {
    fn name(&self) -> &'static str {
        "traversal"
    }

    fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    fn on_event(&mut self, event: SequenceEvent) {
        if let SequenceEvent::StepCompleted(i) = event {
            self.model.mark_step(i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_visited_values_grow_with_steps() {
        let palette = rdsviz::ThemeManager::new().current_theme().palette.clone();
        let mut state = TraversalState::new();
        state.set_order(TraversalOrder::LevelOrder);
        state.start(&palette);
        assert!(state.visited_values().is_empty());

        while state.tick(Duration::from_millis(100)) {}
        assert_eq!(state.visited_values(), vec![50, 30, 70, 20, 40, 60, 80]);

        state.reset();
        assert!(state.visited_values().is_empty());
    }
}
