//! Heap tab state.
//!
//! The heap model is updated immediately; the canvas draws a display copy
//! that starts from the pre-repair staging array and has each swap applied
//! as its animation step completes.

use rdsviz::animation::recipes;
use rdsviz::{Heap, HeapKind, HeapTrace, SequenceEvent, Sequencer, VizPalette, parse_value};
use tracing::{debug, info};

use super::{AnimatedWidget, ignore_busy};

#[derive(Debug, Default)]
pub struct HeapState {
    heap: Heap,
    display: Vec<i64>,
    pending_swaps: Vec<(usize, usize)>,
    sequencer: Sequencer,
    value_text: String,
    status: String,
}

impl HeapState {
    pub fn new() -> Self {
        let heap = Heap::seeded();
        Self {
            display: heap.as_slice().to_vec(),
            heap,
            ..Self::default()
        }
    }

    // ===== Queries =====

    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    /// Values as they should be drawn this frame.
    pub fn display(&self) -> &[i64] {
        &self.display
    }

    pub fn kind(&self) -> HeapKind {
        self.heap.kind()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn value_text_mut(&mut self) -> &mut String {
        &mut self.value_text
    }

    // ===== Operations =====

    pub fn insert(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "insert");
        }
        match parse_value(&self.value_text) {
            Ok(value) => {
                let trace = self.heap.insert(value);
                self.value_text.clear();
                self.status = format!("Inserted {value} with {} swap(s)", trace.swaps.len());
                info!(value, swaps = trace.swaps.len(), "heap insert");
                self.replay(trace, palette);
            }
            Err(e) => debug!("heap insert: {e}"),
        }
    }

    pub fn extract_root(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "extract");
        }
        match self.heap.extract_root() {
            Ok((root, trace)) => {
                self.status = format!("Extracted {root}");
                info!(root, swaps = trace.swaps.len(), "heap extract");
                self.replay(trace, palette);
            }
            Err(e) => debug!("heap extract: {e}"),
        }
    }

    /// Flips max/min, re-sorting the backing array.
    pub fn toggle_kind(&mut self) {
        if self.is_busy() {
            return ignore_busy(self.name(), "toggle");
        }
        let kind = self.heap.toggle_kind();
        self.sync_display();
        self.sequencer.clear_overlay();
        self.status = format!("Switched to {}", kind.label());
        info!(?kind, "heap kind toggled");
    }

    fn replay(&mut self, trace: HeapTrace, palette: &VizPalette) {
        if trace.swaps.is_empty() {
            self.sync_display();
            self.sequencer.clear_overlay();
            return;
        }
        let steps = recipes::heap_swaps(&trace, palette);
        self.display = trace.staging;
        self.pending_swaps = trace.swaps;
        self.begin(steps);
    }

    fn sync_display(&mut self) {
        self.display = self.heap.as_slice().to_vec();
        self.pending_swaps.clear();
    }
}

impl AnimatedWidget for HeapState {
    fn name(&self) -> &'static str {
        "heap"
    }

    fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    fn on_event(&mut self, event: SequenceEvent) {
        match event {
            SequenceEvent::StepCompleted(i) => {
                if let Some(&(a, b)) = self.pending_swaps.get(i) {
                    if a < self.display.len() && b < self.display.len() {
                        self.display.swap(a, b);
                    }
                }
            }
            SequenceEvent::Finished | SequenceEvent::Cancelled => self.sync_display(),
            SequenceEvent::StepStarted(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn palette() -> VizPalette {
        rdsviz::ThemeManager::new().current_theme().palette.clone()
    }

    #[test]
    fn test_display_follows_swaps() {
        let mut state = HeapState::new();
        *state.value_text_mut() = "100".to_string();
        state.insert(&palette());

        // Staging: the new value sits at the end until the swaps play.
        assert_eq!(state.display().last(), Some(&100));
        assert_eq!(state.heap().peek(), Some(100));

        while state.tick(Duration::from_millis(16)) {}
        assert_eq!(state.display(), state.heap().as_slice());
        assert_eq!(state.display()[0], 100);
    }

    #[test]
    fn test_cancel_snaps_to_model() {
        let mut state = HeapState::new();
        state.extract_root(&palette());
        assert!(state.is_busy());
        assert!(state.cancel());
        state.tick(Duration::from_millis(16));
        assert!(!state.is_busy());
        assert_eq!(state.display(), state.heap().as_slice());
        assert!(state.heap().is_valid());
    }

    #[test]
    fn test_toggle_resorts() {
        let mut state = HeapState::new();
        state.toggle_kind();
        assert_eq!(state.kind(), HeapKind::Min);
        assert_eq!(state.display(), &[30, 40, 50, 60, 70, 80, 90]);
    }
}
