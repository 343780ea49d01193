//! B-tree demo.
//!
//! This is a stand-in, not a B-tree: inserts only ever go into the root's
//! key set (kept sorted) and nothing splits. Once the root holds `2t - 1`
//! keys further inserts are dropped. Search does walk the tree by key range.

/// Arena index of a B-tree node.
pub type NodeId = usize;

pub const DEFAULT_DEGREE: usize = 3;
pub const MIN_DEGREE: usize = 2;
pub const MAX_DEGREE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BTreeNode {
    pub keys: Vec<i64>,
    pub children: Vec<NodeId>,
    pub is_leaf: bool,
}

/// Result of [`BTreeDemo::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Key added to the root at this position.
    Inserted { position: usize },
    /// Root already holds `2t - 1` keys; key dropped.
    Full { capacity: usize },
}

/// Nodes visited while looking up a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    pub visited: Vec<NodeId>,
    /// Node and key slot holding the key.
    pub found: Option<(NodeId, usize)>,
}

/// Multi-key tree with a configurable (but mostly cosmetic) degree.
#[derive(Debug, Clone)]
pub struct BTreeDemo {
    nodes: Vec<BTreeNode>,
    root: NodeId,
    degree: usize,
}

impl Default for BTreeDemo {
    fn default() -> Self {
        Self::seeded()
    }
}

impl BTreeDemo {
    /// Root `[10, 20, 30]` over leaves `[5, 8] [15, 18] [25, 28] [35, 40]`.
    pub fn seeded() -> Self {
        let leaves = [[5, 8], [15, 18], [25, 28], [35, 40]];
        let mut nodes = vec![BTreeNode {
            keys: vec![10, 20, 30],
            children: Vec::new(),
            is_leaf: false,
        }];
        for keys in leaves {
            nodes.push(BTreeNode {
                keys: keys.to_vec(),
                children: Vec::new(),
                is_leaf: true,
            });
            let id = nodes.len() - 1;
            nodes[0].children.push(id);
        }
        Self {
            nodes,
            root: 0,
            degree: DEFAULT_DEGREE,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&BTreeNode> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Maximum keys a node may hold: `2t - 1`.
    pub fn capacity(&self) -> usize {
        2 * self.degree - 1
    }

    /// Sets the minimum degree, clamped to `2..=5`.
    pub fn set_degree(&mut self, degree: usize) -> usize {
        self.degree = degree.clamp(MIN_DEGREE, MAX_DEGREE);
        self.degree
    }

    /// Parses typed degree input; zero or anything unparsable means the default.
    pub fn set_degree_text(&mut self, text: &str) -> usize {
        let degree = match text.trim().parse::<usize>() {
            Ok(0) | Err(_) => DEFAULT_DEGREE,
            Ok(degree) => degree,
        };
        self.set_degree(degree)
    }

    /// Appends `key` to the root and re-sorts it, if the root has room.
    pub fn insert(&mut self, key: i64) -> InsertOutcome {
        let capacity = self.capacity();
        let root = &mut self.nodes[self.root];
        if root.keys.len() >= capacity {
            return InsertOutcome::Full { capacity };
        }
        root.keys.push(key);
        root.keys.sort_unstable();
        let position = root.keys.iter().rposition(|&k| k == key).unwrap_or(0);
        InsertOutcome::Inserted { position }
    }

    /// Descends from the root, choosing the child whose key range covers `key`.
    pub fn search_path(&self, key: i64) -> SearchPath {
        let mut visited = Vec::new();
        let mut cursor = Some(self.root);

        while let Some(id) = cursor {
            visited.push(id);
            let node = &self.nodes[id];
            let slot = node.keys.partition_point(|&k| k < key);
            if node.keys.get(slot) == Some(&key) {
                return SearchPath {
                    visited,
                    found: Some((id, slot)),
                };
            }
            cursor = if node.is_leaf {
                None
            } else {
                node.children.get(slot).copied()
            };
        }

        SearchPath {
            visited,
            found: None,
        }
    }

    /// Node ids grouped by depth, root level first.
    pub fn levels(&self) -> Vec<Vec<NodeId>> {
        let mut levels = Vec::new();
        let mut current = vec![self.root];
        while !current.is_empty() {
            let next: Vec<NodeId> = current
                .iter()
                .flat_map(|&id| self.nodes[id].children.iter().copied())
                .collect();
            levels.push(current);
            current = next;
        }
        levels
    }
}
