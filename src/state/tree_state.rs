//! Binary search tree tab state.

use rdsviz::animation::recipes;
use rdsviz::structures::bst::InsertOutcome;
use rdsviz::{BinarySearchTree, SequenceEvent, Sequencer, VizPalette, parse_value};
use tracing::{debug, info};

use super::{AnimatedWidget, ignore_busy};

/// BST plus the outcome of the last search, published when its
/// animation finishes.
#[derive(Debug, Default)]
pub struct TreeState {
    tree: BinarySearchTree,
    sequencer: Sequencer,
    insert_text: String,
    search_text: String,
    pending_status: Option<String>,
    status: String,
}

impl TreeState {
    pub fn new() -> Self {
        Self {
            tree: BinarySearchTree::seeded(),
            ..Self::default()
        }
    }

    pub fn tree(&self) -> &BinarySearchTree {
        &self.tree
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn insert_text_mut(&mut self) -> &mut String {
        &mut self.insert_text
    }

    pub fn search_text_mut(&mut self) -> &mut String {
        &mut self.search_text
    }

    pub fn insert(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "insert");
        }
        let value = match parse_value(&self.insert_text) {
            Ok(value) => value,
            Err(e) => {
                debug!("tree insert: {e}");
                return;
            }
        };
        match self.tree.insert(value) {
            InsertOutcome::Inserted(node) => {
                self.insert_text.clear();
                self.status = format!("Inserted {value} (height {})", self.tree.height());
                info!(value, node, "bst insert");
                self.begin(recipes::tree_insert(node, palette));
            }
            InsertOutcome::Duplicate(_) => {
                self.status = format!("{value} is already in the tree");
                debug!(value, "bst duplicate dropped");
            }
        }
    }

    pub fn search(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "search");
        }
        let value = match parse_value(&self.search_text) {
            Ok(value) => value,
            Err(e) => {
                debug!("tree search: {e}");
                return;
            }
        };
        let path = self.tree.search_path(value);
        let verdict = if path.found.is_some() { "found" } else { "not found" };
        self.pending_status = Some(format!(
            "{value} {verdict} after visiting {} node(s)",
            path.visited.len()
        ));
        self.status = format!("Searching for {value}...");
        self.begin(recipes::tree_search(&path, palette));
    }
}

impl AnimatedWidget for TreeState {
    fn name(&self) -> &'static str {
        "binary tree"
    }

    fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }

    fn on_event(&mut self, event: SequenceEvent) {
        match event {
            SequenceEvent::Finished => {
                if let Some(status) = self.pending_status.take() {
                    self.status = status;
                }
            }
            SequenceEvent::Cancelled => {
                self.pending_status = None;
                self.status.clear();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_search_result_appears_when_finished() {
        let palette = rdsviz::ThemeManager::new().current_theme().palette.clone();
        let mut state = TreeState::new();
        *state.search_text_mut() = "60".to_string();
        state.search(&palette);
        assert_eq!(state.status(), "Searching for 60...");

        while state.tick(Duration::from_millis(50)) {}
        assert_eq!(state.status(), "60 found after visiting 3 node(s)");
    }

    #[test]
    fn test_duplicate_insert_does_not_animate() {
        let palette = rdsviz::ThemeManager::new().current_theme().palette.clone();
        let mut state = TreeState::new();
        *state.insert_text_mut() = "50".to_string();
        state.insert(&palette);
        assert!(!state.is_busy());
        assert_eq!(state.tree().len(), 7);

        *state.insert_text_mut() = "55".to_string();
        state.insert(&palette);
        assert!(state.is_busy());
        assert_eq!(state.tree().len(), 8);
    }
}
