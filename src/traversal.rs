//! Traversal widget model: a fixed tree and the visiting order being shown.

use crate::structures::bst::{BinarySearchTree, NodeId, TraversalOrder};

/// Immutable seed tree plus the progress of the current walk.
#[derive(Debug, Clone)]
pub struct TraversalModel {
    tree: BinarySearchTree,
    order: TraversalOrder,
    visited: Vec<NodeId>,
    current_step: Option<usize>,
}

impl Default for TraversalModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TraversalModel {
    pub fn new() -> Self {
        Self {
            tree: BinarySearchTree::seeded(),
            order: TraversalOrder::InOrder,
            visited: Vec::new(),
            current_step: None,
        }
    }

    pub fn tree(&self) -> &BinarySearchTree {
        &self.tree
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }

    pub fn set_order(&mut self, order: TraversalOrder) {
        self.order = order;
    }

    /// Computes the visiting order for the selected traversal and rewinds
    /// the step cursor. Returns the node ids to animate.
    pub fn begin(&mut self) -> Vec<NodeId> {
        self.visited = self.tree.traverse(self.order);
        self.current_step = None;
        self.visited.clone()
    }

    /// Marks step `index` of the walk as the one being shown.
    pub fn mark_step(&mut self, index: usize) {
        if index < self.visited.len() {
            self.current_step = Some(index);
        }
    }

    pub fn current_step(&self) -> Option<usize> {
        self.current_step
    }

    /// Values of the last computed walk.
    pub fn result_values(&self) -> Vec<i64> {
        self.visited
            .iter()
            .filter_map(|&id| self.tree.value(id))
            .collect()
    }

    pub fn reset(&mut self) {
        self.visited.clear();
        self.current_step = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_and_mark() {
        let mut model = TraversalModel::new();
        model.set_order(TraversalOrder::LevelOrder);
        let ids = model.begin();
        assert_eq!(ids.len(), 7);
        assert_eq!(model.result_values(), vec![50, 30, 70, 20, 40, 60, 80]);
        model.mark_step(2);
        assert_eq!(model.current_step(), Some(2));
        model.mark_step(99);
        assert_eq!(model.current_step(), Some(2));
    }

    #[test]
    fn test_reset_clears_walk() {
        let mut model = TraversalModel::new();
        model.begin();
        model.mark_step(0);
        model.reset();
        assert!(model.result_values().is_empty());
        assert_eq!(model.current_step(), None);
    }
}
