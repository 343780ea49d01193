//! Centralized application state for the visualizer.
//!
//! Composes one focused state component per tab plus theme and layout.
//! Components keep their own invariants; this struct only routes between
//! them.

use std::time::Duration;

use rdsviz::{Language, Topic};

use crate::state::{
    AnimatedWidget, ArrayState, BTreeState, HeapState, LayoutState, ListState, ProblemState,
    SearchState, ThemeState, TraversalState, TreeState,
};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Visualizers =====
    pub array: ArrayState,
    pub list: ListState,
    pub tree: TreeState,
    pub heap: HeapState,
    pub btree: BTreeState,
    pub search: SearchState,
    pub traversal: TraversalState,

    // ===== Judge =====
    pub problems: ProblemState,

    // ===== Presentation =====
    pub theme: ThemeState,
    pub layout: LayoutState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(ThemeState::new(), LayoutState::new(), Language::default())
    }

    /// Builds the state from persisted preferences.
    pub fn with_settings(theme: ThemeState, layout: LayoutState, language: Language) -> Self {
        Self {
            array: ArrayState::new(),
            list: ListState::new(),
            tree: TreeState::new(),
            heap: HeapState::new(),
            btree: BTreeState::new(),
            search: SearchState::new(),
            traversal: TraversalState::new(),
            problems: ProblemState::new(language),
            theme,
            layout,
            error_message: None,
        }
    }

    // ===== Widget Routing =====

    pub fn widget(&self, topic: Topic) -> &dyn AnimatedWidget {
        match topic {
            Topic::Array => &self.array,
            Topic::LinkedList => &self.list,
            Topic::BinaryTree => &self.tree,
            Topic::Heap => &self.heap,
            Topic::BTree => &self.btree,
            Topic::Search => &self.search,
            Topic::Traversal => &self.traversal,
        }
    }

    pub fn widget_mut(&mut self, topic: Topic) -> &mut dyn AnimatedWidget {
        match topic {
            Topic::Array => &mut self.array,
            Topic::LinkedList => &mut self.list,
            Topic::BinaryTree => &mut self.tree,
            Topic::Heap => &mut self.heap,
            Topic::BTree => &mut self.btree,
            Topic::Search => &mut self.search,
            Topic::Traversal => &mut self.traversal,
        }
    }

    /// Advances every widget's sequencer. Returns true if any is still busy.
    pub fn tick_all(&mut self, dt: Duration) -> bool {
        let mut busy = false;
        for topic in Topic::ALL {
            busy |= self.widget_mut(topic).tick(dt);
        }
        busy
    }

    pub fn any_busy(&self) -> bool {
        Topic::ALL.iter().any(|&t| self.widget(t).is_busy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_all_drives_background_tabs() {
        let mut state = AppState::new();
        let palette = state.theme.palette().clone();
        *state.heap.value_text_mut() = "95".to_string();
        state.heap.insert(&palette);
        state.traversal.start(&palette);
        assert!(state.any_busy());

        while state.tick_all(Duration::from_millis(50)) {}
        assert!(!state.any_busy());
        assert_eq!(state.heap.display(), state.heap.heap().as_slice());
    }
}
