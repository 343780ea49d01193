//! Search tab state.

use rdsviz::animation::recipes;
use rdsviz::structures::search::SEARCH_SEED;
use rdsviz::{
    SearchAlgorithm, SearchOutcome, SequenceEvent, Sequencer, VizPalette, binary_search,
    linear_search, parse_value,
};
use tracing::{debug, info};

use super::{AnimatedWidget, ignore_busy};

/// Sorted values, the chosen algorithm and the outcome of the last run.
///
/// The outcome is only published once the animation finishes, so the
/// result line never gets ahead of the canvas.
#[derive(Debug)]
pub struct SearchState {
    values: Vec<i64>,
    algorithm: SearchAlgorithm,
    sequencer: Sequencer,
    target_text: String,
    pending: Option<(i64, SearchOutcome)>,
    result: Option<(i64, SearchOutcome)>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            values: SEARCH_SEED.to_vec(),
            algorithm: SearchAlgorithm::default(),
            sequencer: Sequencer::new(),
            target_text: String::new(),
            pending: None,
            result: None,
        }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }

    /// Target and outcome of the last completed search.
    pub fn result(&self) -> Option<&(i64, SearchOutcome)> {
        self.result.as_ref()
    }

    pub fn target_text_mut(&mut self) -> &mut String {
        &mut self.target_text
    }

    pub fn set_algorithm(&mut self, algorithm: SearchAlgorithm) {
        if self.is_busy() {
            return ignore_busy(self.name(), "switch algorithm");
        }
        if self.algorithm != algorithm {
            self.algorithm = algorithm;
            self.result = None;
            self.sequencer.clear_overlay();
        }
    }

    pub fn run(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "search");
        }
        let target = match parse_value(&self.target_text) {
            Ok(target) => target,
            Err(e) => {
                debug!("search: {e}");
                return;
            }
        };
        let (outcome, steps) = match self.algorithm {
            SearchAlgorithm::Linear => {
                let outcome = linear_search(&self.values, target);
                let steps = recipes::linear_search(&outcome, palette);
                (outcome, steps)
            }
            SearchAlgorithm::Binary => {
                let outcome = binary_search(&self.values, target);
                let steps = recipes::binary_search(&outcome, &self.values, target, palette);
                (outcome, steps)
            }
        };
        info!(
            algorithm = self.algorithm.label(),
            target,
            index = outcome.signed_index(),
            comparisons = outcome.comparisons,
            "search run"
        );
        self.result = None;
        self.pending = Some((target, outcome));
        self.begin(steps);
    }
}

impl AnimatedWidget for SearchState {
    fn name(&self) -> &'static str {
        "search"
    }

    fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    fn on_event(&mut self, event: SequenceEvent) {
        match event {
            SequenceEvent::Finished => self.result = self.pending.take(),
            SequenceEvent::Cancelled => self.pending = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_result_published_on_finish() {
        let palette = rdsviz::ThemeManager::new().current_theme().palette.clone();
        let mut state = SearchState::new();
        state.set_algorithm(SearchAlgorithm::Binary);
        *state.target_text_mut() = "74".to_string();
        state.run(&palette);
        assert!(state.result().is_none());

        while state.tick(Duration::from_millis(40)) {}
        let (target, outcome) = state.result().unwrap();
        assert_eq!(*target, 74);
        assert_eq!(outcome.index, Some(6));
    }

    #[test]
    fn test_cancel_discards_result() {
        let palette = rdsviz::ThemeManager::new().current_theme().palette.clone();
        let mut state = SearchState::new();
        *state.target_text_mut() = "95".to_string();
        state.run(&palette);
        state.cancel();
        state.tick(Duration::from_millis(10));
        assert!(!state.is_busy());
        assert!(state.result().is_none());
    }
}
