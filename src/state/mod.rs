//! State management for the visualizer GUI.
//!
//! One focused state component per tab plus theme and layout. No UI code
//! lives here; panels read these through accessors and the application
//! coordinator mutates them through intent-revealing methods.

mod array_state;
mod list_state;
mod tree_state;
mod heap_state;
mod btree_state;
mod search_state;
mod traversal_state;
mod problem_state;
mod theme_state;
mod layout_state;

pub use array_state::ArrayState;
pub use list_state::ListState;
pub use tree_state::TreeState;
pub use heap_state::HeapState;
pub use btree_state::BTreeState;
pub use search_state::SearchState;
pub use traversal_state::TraversalState;
pub use problem_state::ProblemState;
pub use theme_state::ThemeState;
pub use layout_state::{LayoutState, MAX_SPEED, MIN_SPEED, Tab};

use std::time::Duration;

use rdsviz::{SequenceEvent, Sequencer, Step};
use tracing::debug;

/// A tab whose canvas is driven by its own [`Sequencer`].
///
/// Implementors only expose the sequencer and react to events; starting,
/// advancing and cancelling are shared.
pub trait AnimatedWidget {
    fn name(&self) -> &'static str;

    fn sequencer(&self) -> &Sequencer;

    fn sequencer_mut(&mut self) -> &mut Sequencer;

    /// Called for every event the sequencer emits.
    fn on_event(&mut self, _event: SequenceEvent) {}

    fn is_busy(&self) -> bool {
        self.sequencer().is_busy()
    }

    /// Starts `steps`. Returns false (and changes nothing) while busy.
    fn begin(&mut self, steps: Vec<Step>) -> bool {
        match self.sequencer_mut().start(steps) {
            Ok(events) => {
                for event in events {
                    self.on_event(event);
                }
                true
            }
            Err(e) => {
                debug!(widget = self.name(), "{e}");
                false
            }
        }
    }

    /// Advances the animation by `dt`. Returns true while still busy.
    fn tick(&mut self, dt: Duration) -> bool {
        if !self.is_busy() {
            return false;
        }
        let events = self.sequencer_mut().advance(dt);
        for event in events {
            self.on_event(event);
        }
        self.is_busy()
    }

    fn cancel(&mut self) -> bool {
        self.sequencer_mut().cancel()
    }
}

/// Logs and drops an action attempted mid-animation.
pub(crate) fn ignore_busy(widget: &'static str, action: &str) {
    debug!(widget, action, "ignored while animating");
}
