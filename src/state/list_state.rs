//! Linked list tab state.

use rdsviz::animation::recipes;
use rdsviz::{LinkedList, Sequencer, VizPalette, parse_value};
use tracing::{debug, info};

use super::{AnimatedWidget, ignore_busy};

#[derive(Debug, Default)]
pub struct ListState {
    list: LinkedList,
    sequencer: Sequencer,
    value_text: String,
    status: String,
}

impl ListState {
    pub fn new() -> Self {
        Self {
            list: LinkedList::seeded(),
            ..Self::default()
        }
    }

    pub fn list(&self) -> &LinkedList {
        &self.list
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn value_text_mut(&mut self) -> &mut String {
        &mut self.value_text
    }

    /// Inserts the typed value as the new head.
    pub fn prepend(&mut self) {
        if self.is_busy() {
            return ignore_busy(self.name(), "prepend");
        }
        match parse_value(&self.value_text) {
            Ok(value) => {
                self.list.prepend(value);
                self.sequencer.clear_overlay();
                self.value_text.clear();
                self.status = format!("Inserted {value} at head (O(1))");
                info!(value, "list prepend");
            }
            Err(e) => debug!("list prepend: {e}"),
        }
    }

    /// Removes the head, always leaving at least one node.
    pub fn remove_head(&mut self) {
        if self.is_busy() {
            return ignore_busy(self.name(), "remove head");
        }
        if self.list.len() <= 1 {
            debug!("list remove: keeping last node");
            return;
        }
        if let Ok(value) = self.list.remove_head() {
            self.sequencer.clear_overlay();
            self.status = format!("Removed head {value}");
            info!(value, "list remove head");
        }
    }

    /// Walks the chain from the head.
    pub fn traverse(&mut self, palette: &VizPalette) {
        if self.is_busy() {
            return ignore_busy(self.name(), "traverse");
        }
        let nodes: Vec<usize> = self.list.iter().map(|(id, _)| id).collect();
        self.status = format!("Traversing {} nodes (O(n))", nodes.len());
        self.begin(recipes::list_traverse(&nodes, palette));
    }
}

impl AnimatedWidget for ListState {
    fn name(&self) -> &'static str {
        "linked list"
    }

    fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    fn sequencer_mut(&mut self) -> &mut Sequencer {
        &mut self.sequencer
    }
}
