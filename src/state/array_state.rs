//! Array tab state.

use rdsviz::animation::recipes;
use rdsviz::{ArrayModel, Sequencer, VizPalette, parse_index, parse_value};
use tracing::{debug, info};

use super::{AnimatedWidget, ignore_busy};

/// Array model, its sequencer and the tab's input buffers.
#[derive(Debug, Default)]
pub struct ArrayState {
    model: ArrayModel,
    sequencer: Sequencer,
    value_text: String,
    index_text: String,
    status: String,
}

impl ArrayState {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn model(&self) -> &ArrayModel {
        &self.model
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    // ===== Input Buffers =====

    pub fn value_text_mut(&mut self) -> &mut String {
        &mut self.value_text
    }

    pub fn index_text_mut(&mut self) -> &mut String {
        &mut self.index_text
    }

    // ===== Operations =====

    /// Appends the typed value.
    pub fn push(&mut self) {
        if self.is_busy() {
            return ignore_busy(self.name(), "push");
        }
        match parse_value(&self.value_text) {
            Ok(value) => {
                let index = self.model.push(value);
                self.sequencer.clear_overlay();
                self.value_text.clear();
                self.status = format!("Pushed {value} at index {index}");
                info!(value, index, "array push");
            }
            Err(e) => debug!("array push: {e}"),
        }
    }

    /// Highlights the element at the typed index.
    pub fn access(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "access");
        }
        let result = parse_index(&self.index_text).and_then(|index| {
            self.model.access(index).map(|value| (index, value))
        });
        match result {
            Ok((index, value)) => {
                self.status = format!("arr[{index}] = {value}  (O(1) access)");
                self.begin(recipes::array_access(index, palette));
            }
            Err(e) => debug!("array access: {e}"),
        }
    }

    /// Removes the last element.
    pub fn pop(&mut self) {
        if self.is_busy() {
            return ignore_busy(self.name(), "pop");
        }
        match self.model.pop() {
            Ok(value) => {
                self.sequencer.clear_overlay();
                self.status = format!("Popped {value}");
                info!(value, "array pop");
            }
            Err(e) => debug!("array pop: {e}"),
        }
    }
}

impl AnimatedWidget for ArrayState {
    fn name(&self) -> &'static str {
        "array"
    }

    fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdsviz::ThemeManager;
    use std::time::Duration;

    #[test]
    fn test_push_access_pop() {
        let palette = ThemeManager::new().current_theme().palette.clone();
        let mut state = ArrayState::new();

        *state.value_text_mut() = "99".to_string();
        state.push();
        assert_eq!(state.model().as_slice().last(), Some(&99));

        *state.index_text_mut() = "1".to_string();
        state.access(&palette);
        assert!(state.is_busy());
        assert_eq!(state.model().len(), 6);

        // Mutations are ignored mid-animation.
        state.pop();
        assert_eq!(state.model().len(), 6);

        while state.tick(Duration::from_millis(100)) {}
        state.pop();
        assert_eq!(state.model().len(), 5);
    }

    #[test]
    fn test_bad_input_is_ignored() {
        let palette = ThemeManager::new().current_theme().palette.clone();
        let mut state = ArrayState::new();
        *state.value_text_mut() = "abc".to_string();
        state.push();
        *state.index_text_mut() = "42".to_string();
        state.access(&palette);
        assert_eq!(state.model().len(), 5);
        assert!(!state.is_busy());
    }
}
