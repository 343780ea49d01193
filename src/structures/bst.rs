//! Binary search tree stored in an index arena.
//!
//! Nodes carry explicit parent/left/right indices. Equal keys are dropped on
//! insert, so the tree holds distinct values only. No rebalancing.

use std::collections::VecDeque;

/// Arena index of a tree node.
pub type NodeId = usize;

/// Seed values inserted in this order to produce the three-level demo tree
/// (50; 30/70; 20/40/60/80).
pub const TREE_SEED: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];

#[derive(Debug, Clone, PartialEq, Eq)]
struct TreeNode {
    value: i64,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Result of [`BinarySearchTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new node was created.
    Inserted(NodeId),
    /// The value already exists at this node; nothing changed.
    Duplicate(NodeId),
}

/// Root-to-node path produced by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    /// Every node compared against the target, root first.
    pub visited: Vec<NodeId>,
    /// The node holding the target, if present.
    pub found: Option<NodeId>,
}

/// The four canonical visiting orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TraversalOrder {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 4] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
        TraversalOrder::LevelOrder,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "In-order",
            TraversalOrder::PreOrder => "Pre-order",
            TraversalOrder::PostOrder => "Post-order",
            TraversalOrder::LevelOrder => "Level-order",
        }
    }

    /// One-line description of the visiting rule.
    pub fn rule(self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "Left → Root → Right (gives sorted order for BST)",
            TraversalOrder::PreOrder => "Root → Left → Right (useful for copying trees)",
            TraversalOrder::PostOrder => "Left → Right → Root (useful for deleting trees)",
            TraversalOrder::LevelOrder => "Level by level, left to right (breadth-first)",
        }
    }
}

/// Binary search tree of `i64` keys.
#[derive(Debug, Clone, Default)]
pub struct BinarySearchTree {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts every value in order, ignoring duplicates.
    pub fn from_values(values: &[i64]) -> Self {
        let mut tree = Self::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    /// The three-level tree shown by the tree and traversal widgets.
    pub fn seeded() -> Self {
        Self::from_values(&TREE_SEED)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn value(&self, id: NodeId) -> Option<i64> {
        self.nodes.get(id).map(|n| n.value)
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.left
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.right
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.parent
    }

    /// Inserts `value`, descending left for smaller and right for larger keys.
    pub fn insert(&mut self, value: i64) -> InsertOutcome {
        let Some(mut current) = self.root else {
            let id = self.alloc(value, None);
            self.root = Some(id);
            return InsertOutcome::Inserted(id);
        };

        loop {
            let node = &self.nodes[current];
            let next = if value < node.value {
                node.left
            } else if value > node.value {
                node.right
            } else {
                return InsertOutcome::Duplicate(current);
            };

            match next {
                Some(child) => current = child,
                None => {
                    let id = self.alloc(value, Some(current));
                    let parent = &mut self.nodes[current];
                    if value < parent.value {
                        parent.left = Some(id);
                    } else {
                        parent.right = Some(id);
                    }
                    return InsertOutcome::Inserted(id);
                }
            }
        }
    }

    fn alloc(&mut self, value: i64, parent: Option<NodeId>) -> NodeId {
        self.nodes.push(TreeNode {
            value,
            parent,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// Descends from the root toward `value`, recording each compared node.
    pub fn search_path(&self, value: i64) -> SearchPath {
        let mut visited = Vec::new();
        let mut cursor = self.root;

        while let Some(id) = cursor {
            visited.push(id);
            let node = &self.nodes[id];
            if value == node.value {
                return SearchPath {
                    visited,
                    found: Some(id),
                };
            }
            cursor = if value < node.value { node.left } else { node.right };
        }

        SearchPath {
            visited,
            found: None,
        }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.search_path(value).found.is_some()
    }

    /// Number of levels (0 for an empty tree).
    pub fn height(&self) -> usize {
        fn go(tree: &BinarySearchTree, node: Option<NodeId>) -> usize {
            match node {
                Some(id) => 1 + go(tree, tree.left(id)).max(go(tree, tree.right(id))),
                None => 0,
            }
        }
        go(self, self.root)
    }

    /// Node ids in the requested visiting order.
    pub fn traverse(&self, order: TraversalOrder) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        match order {
            TraversalOrder::InOrder => self.in_order(self.root, &mut out),
            TraversalOrder::PreOrder => self.pre_order(self.root, &mut out),
            TraversalOrder::PostOrder => self.post_order(self.root, &mut out),
            TraversalOrder::LevelOrder => self.level_order(&mut out),
        }
        out
    }

    /// Values in the requested visiting order.
    pub fn traverse_values(&self, order: TraversalOrder) -> Vec<i64> {
        self.traverse(order)
            .into_iter()
            .map(|id| self.nodes[id].value)
            .collect()
    }

    fn in_order(&self, node: Option<NodeId>, out: &mut Vec<NodeId>) {
        if let Some(id) = node {
            self.in_order(self.nodes[id].left, out);
            out.push(id);
            self.in_order(self.nodes[id].right, out);
        }
    }

    fn pre_order(&self, node: Option<NodeId>, out: &mut Vec<NodeId>) {
        if let Some(id) = node {
            out.push(id);
            self.pre_order(self.nodes[id].left, out);
            self.pre_order(self.nodes[id].right, out);
        }
    }

    fn post_order(&self, node: Option<NodeId>, out: &mut Vec<NodeId>) {
        if let Some(id) = node {
            self.post_order(self.nodes[id].left, out);
            self.post_order(self.nodes[id].right, out);
            out.push(id);
        }
    }

    fn level_order(&self, out: &mut Vec<NodeId>) {
        let mut queue: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = queue.pop_front() {
            out.push(id);
            let node = &self.nodes[id];
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_tree_shape() {
        let tree = BinarySearchTree::seeded();
        let root = tree.root().unwrap();
        assert_eq!(tree.value(root), Some(50));
        assert_eq!(tree.left(root).and_then(|n| tree.value(n)), Some(30));
        assert_eq!(tree.right(root).and_then(|n| tree.value(n)), Some(70));
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn test_seed_traversals() {
        let tree = BinarySearchTree::seeded();
        assert_eq!(tree.traverse_values(TraversalOrder::InOrder), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.traverse_values(TraversalOrder::PreOrder), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(tree.traverse_values(TraversalOrder::PostOrder), vec![20, 40, 30, 60, 80, 70, 50]);
        assert_eq!(tree.traverse_values(TraversalOrder::LevelOrder), vec![50, 30, 70, 20, 40, 60, 80]);
    }

    #[test]
    fn test_duplicate_is_ignored() {
        let mut tree = BinarySearchTree::seeded();
        let before = tree.len();
        assert!(matches!(tree.insert(40), InsertOutcome::Duplicate(_)));
        assert_eq!(tree.len(), before);
    }

    #[test]
    fn test_insert_links_parent() {
        let mut tree = BinarySearchTree::seeded();
        let InsertOutcome::Inserted(id) = tree.insert(45) else {
            panic!("45 should be new");
        };
        let parent = tree.parent(id).unwrap();
        assert_eq!(tree.value(parent), Some(40));
        assert_eq!(tree.right(parent), Some(id));
    }

    #[test]
    fn test_search_path_found() {
        let tree = BinarySearchTree::seeded();
        let path = tree.search_path(60);
        let values: Vec<i64> = path.visited.iter().filter_map(|&id| tree.value(id)).collect();
        assert_eq!(values, vec![50, 70, 60]);
        assert_eq!(path.found.and_then(|id| tree.value(id)), Some(60));
    }

    #[test]
    fn test_search_path_missing_stops_at_leaf() {
        let tree = BinarySearchTree::seeded();
        let path = tree.search_path(35);
        let values: Vec<i64> = path.visited.iter().filter_map(|&id| tree.value(id)).collect();
        assert_eq!(values, vec![50, 30, 40]);
        assert_eq!(path.found, None);
    }

    #[test]
    fn test_empty_tree() {
        let tree = BinarySearchTree::new();
        assert!(tree.traverse(TraversalOrder::LevelOrder).is_empty());
        assert!(tree.search_path(1).visited.is_empty());
        assert_eq!(tree.height(), 0);
    }
}
