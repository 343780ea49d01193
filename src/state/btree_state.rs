//! B-tree tab state.

use rdsviz::animation::recipes;
use rdsviz::structures::btree::InsertOutcome;
use rdsviz::{BTreeDemo, SequenceEvent, Sequencer, VizPalette, parse_value};
use tracing::{debug, info};

use super::{AnimatedWidget, ignore_busy};

#[derive(Debug, Default)]
pub struct BTreeState {
    tree: BTreeDemo,
    sequencer: Sequencer,
    key_text: String,
    degree_text: String,
    pending_status: Option<String>,
    status: String,
}

impl BTreeState {
    pub fn new() -> Self {
        let tree = BTreeDemo::seeded();
        Self {
            degree_text: tree.degree().to_string(),
            tree,
            ..Self::default()
        }
    }

    pub fn tree(&self) -> &BTreeDemo {
        &self.tree
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn key_text_mut(&mut self) -> &mut String {
        &mut self.key_text
    }

    pub fn degree_text_mut(&mut self) -> &mut String {
        &mut self.degree_text
    }

    /// Applies the typed degree; bad input falls back to the default.
    pub fn apply_degree(&mut self) {
        let degree = self.tree.set_degree_text(&self.degree_text);
        self.degree_text = degree.to_string();
        self.status = format!("Degree t = {degree}, up to {} keys per node", self.tree.capacity());
        info!(degree, "btree degree set");
    }

    pub fn insert(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "insert");
        }
        let key = match parse_value(&self.key_text) {
            Ok(key) => key,
            Err(e) => {
                debug!("btree insert: {e}");
                return;
            }
        };
        match self.tree.insert(key) {
            InsertOutcome::Inserted { position } => {
                self.key_text.clear();
                self.status = format!("Inserted {key} into the root at slot {position}");
                info!(key, position, "btree insert");
                self.begin(recipes::btree_insert(self.tree.root(), palette));
            }
            InsertOutcome::Full { capacity } => {
                self.status = format!("Root is full ({capacity} keys); {key} not inserted");
                debug!(key, capacity, "btree insert dropped");
            }
        }
    }

    pub fn search(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "search");
        }
        let key = match parse_value(&self.key_text) {
            Ok(key) => key,
            Err(e) => {
                debug!("btree search: {e}");
                return;
            }
        };
        let path = self.tree.search_path(key);
        self.pending_status = Some(match path.found {
            Some(_) => format!("{key} found at depth {}", path.visited.len() - 1),
            None => format!("{key} not found ({} node(s) read)", path.visited.len()),
        });
        self.begin(recipes::btree_search(&path, palette));
    }
}

impl AnimatedWidget for BTreeState {
    fn name(&self) -> &'static str {
        "b-tree"
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
            SequenceEvent::Cancelled => self.pending_status = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_search_reports_depth() {
        let palette = rdsviz::ThemeManager::new().current_theme().palette.clone();
        let mut state = BTreeState::new();
        *state.key_text_mut() = "18".to_string();
        state.search(&palette);
        while state.tick(Duration::from_millis(100)) {}
        assert_eq!(state.status(), "18 found at depth 1");
    }

    #[test]
    fn test_degree_input() {
        let mut state = BTreeState::new();
        *state.degree_text_mut() = "junk".to_string();
        state.apply_degree();
        assert_eq!(state.tree().degree(), 3);
        *state.degree_text_mut() = "8".to_string();
        state.apply_degree();
        assert_eq!(state.tree().degree(), 5);
        *state.degree_text_mut() = "0".to_string();
        state.apply_degree();
        assert_eq!(state.tree().degree(), 3);
    }
}
