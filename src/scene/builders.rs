//! Scene builders, one per widget.
//!
//! Each builder lays the structure out in world units and paints every
//! element with the widget accent. Highlights come from the sequencer
//! overlay, never from here.

use egui::{Color32, Pos2, Vec2};

use super::{EdgeStyle, ElementId, Scene, SceneElement, Shape, NULL_MARKER};
use crate::structures::bst::{BinarySearchTree, NodeId};
use crate::structures::btree::BTreeDemo;
use crate::structures::linked_list::LinkedList;

const ARRAY_PITCH: f32 = 2.0;
const SEARCH_PITCH: f32 = 1.8;
const LIST_PITCH: f32 = 4.0;
const LEVEL_DROP: f32 = 3.0;
const TREE_SPACING: f32 = 4.0;
const TREE_SHRINK: f32 = 0.6;
const BTREE_SPACING: f32 = 12.0;
const BTREE_SHRINK: f32 = 0.7;
const BTREE_KEY_WIDTH: f32 = 1.4;
const TOP: f32 = 4.0;

/// Centre of slot `index` in a row of `len` cells spaced `pitch` apart.
fn row_x(index: usize, len: usize, pitch: f32) -> f32 {
    (index as f32 - len as f32 / 2.0) * pitch
}

fn indexed_row(values: &[i64], pitch: f32, size: f32, accent: Color32) -> Scene {
    let mut scene = Scene::new();
    for (index, value) in values.iter().enumerate() {
        scene.push(SceneElement {
            id: index as ElementId,
            label: value.to_string(),
            caption: Some(format!("[{index}]")),
            position: Pos2::new(row_x(index, values.len(), pitch), 0.0),
            size: Vec2::splat(size),
            shape: Shape::Cell,
            color: accent,
        });
    }
    scene
}

/// Row of indexed cells; element id is the slot index.
pub fn array_scene(values: &[i64], accent: Color32) -> Scene {
    indexed_row(values, ARRAY_PITCH, 1.5, accent)
}

/// Same as the array row, slightly tighter for the nine-value seed.
pub fn search_scene(values: &[i64], accent: Color32) -> Scene {
    indexed_row(values, SEARCH_PITCH, 1.4, accent)
}

/// Nodes left to right from the head, arrows between them and a trailing
/// `NULL` marker. Element ids are arena indices.
pub fn list_scene(list: &LinkedList, accent: Color32) -> Scene {
    let mut scene = Scene::new();
    let len = list.len();
    let mut previous: Option<ElementId> = None;
    let mut last_x = None;

    for (index, (id, value)) in list.iter().enumerate() {
        let x = row_x(index, len, LIST_PITCH);
        let id = id as ElementId;
        scene.push(SceneElement {
            id,
            label: value.to_string(),
            caption: (index == 0).then(|| "HEAD".to_string()),
            position: Pos2::new(x, 0.0),
            size: Vec2::new(2.4, 1.0),
            shape: Shape::ListNode,
            color: accent,
        });
        if let Some(prev) = previous {
            scene.connect(prev, id, EdgeStyle::Arrow);
        }
        previous = Some(id);
        last_x = Some(x);
    }

    if let (Some(tail), Some(x)) = (previous, last_x) {
        scene.push(SceneElement {
            id: NULL_MARKER,
            label: "NULL".to_string(),
            caption: None,
            position: Pos2::new(x + 2.8, 0.0),
            size: Vec2::new(1.2, 0.6),
            shape: Shape::NullMarker,
            color: accent,
        });
        scene.connect(tail, NULL_MARKER, EdgeStyle::Arrow);
    }
    scene
}

/// Root at `(0, 4)`; children at `x ± spacing, y - 3` with the spacing
/// shrinking by 0.6 per level. Used by the tree and traversal widgets.
pub fn tree_scene(tree: &BinarySearchTree, accent: Color32) -> Scene {
    let mut scene = Scene::new();
    if let Some(root) = tree.root() {
        place_tree_node(tree, root, Pos2::new(0.0, TOP), TREE_SPACING, accent, &mut scene);
    }
    scene
}

fn place_tree_node(
    tree: &BinarySearchTree,
    id: NodeId,
    at: Pos2,
    spacing: f32,
    accent: Color32,
    scene: &mut Scene,
) {
    let Some(value) = tree.value(id) else {
        return;
    };
    scene.push(SceneElement {
        id: id as ElementId,
        label: value.to_string(),
        caption: None,
        position: at,
        size: Vec2::splat(1.6),
        shape: Shape::Circle,
        color: accent,
    });

    let children = [(tree.left(id), -spacing), (tree.right(id), spacing)];
    for (child, dx) in children {
        if let Some(child) = child {
            scene.connect(id as ElementId, child as ElementId, EdgeStyle::Line);
            let next = Pos2::new(at.x + dx, at.y - LEVEL_DROP);
            place_tree_node(tree, child, next, spacing * TREE_SHRINK, accent, scene);
        }
    }
}

/// Position of heap slot `index`: level rows 2.5 apart, slots spread over a
/// width of 8 units per level.
pub fn heap_slot_position(index: usize) -> Pos2 {
    let slot = index + 1;
    let level = (usize::BITS - 1 - slot.leading_zeros()) as i32;
    let first = (1usize << level) - 1;
    let in_level = (index - first) as f32;
    let max_in_level = (1usize << level) as f32;
    let spacing = 8.0 / max_in_level;
    let x = (in_level - (max_in_level - 1.0) / 2.0) * spacing;
    let y = TOP - level as f32 * 2.5;
    Pos2::new(x, y)
}

/// Heap drawn as its implicit tree; element id is the slot index.
pub fn heap_scene(values: &[i64], accent: Color32) -> Scene {
    let mut scene = Scene::new();
    for (index, value) in values.iter().enumerate() {
        scene.push(SceneElement {
            id: index as ElementId,
            label: value.to_string(),
            caption: None,
            position: heap_slot_position(index),
            size: Vec2::splat(1.4),
            shape: Shape::Circle,
            color: accent,
        });
        if index > 0 {
            scene.connect(((index - 1) / 2) as ElementId, index as ElementId, EdgeStyle::Line);
        }
    }
    scene
}

/// B-tree nodes as key rows. Children split the parent's spacing evenly
/// and the spacing shrinks by 0.7 per level.
pub fn btree_scene(tree: &BTreeDemo, accent: Color32) -> Scene {
    let mut scene = Scene::new();
    place_btree_node(tree, tree.root(), Pos2::new(0.0, TOP), BTREE_SPACING, accent, &mut scene);
    scene
}

fn place_btree_node(
    tree: &BTreeDemo,
    id: usize,
    at: Pos2,
    spacing: f32,
    accent: Color32,
    scene: &mut Scene,
) {
    let Some(node) = tree.node(id) else {
        return;
    };
    let label = node
        .keys
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(" | ");
    scene.push(SceneElement {
        id: id as ElementId,
        label,
        caption: None,
        position: at,
        size: Vec2::new(node.keys.len().max(1) as f32 * BTREE_KEY_WIDTH, 1.0),
        shape: Shape::KeyRow {
            keys: node.keys.clone(),
        },
        color: accent,
    });

    if node.is_leaf || node.children.is_empty() {
        return;
    }
    let child_spacing = spacing / node.children.len() as f32;
    let start = at.x - spacing / 2.0;
    for (index, &child) in node.children.iter().enumerate() {
        scene.connect(id as ElementId, child as ElementId, EdgeStyle::Line);
        let x = start + (index as f32 + 0.5) * child_spacing;
        place_btree_node(
            tree,
            child,
            Pos2::new(x, at.y - LEVEL_DROP),
            spacing * BTREE_SHRINK,
            accent,
            scene,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: Color32 = Color32::BLUE;

    #[test]
    fn test_array_row_is_centered() {
        let scene = array_scene(&[1, 2, 3, 4], ACCENT);
        assert_eq!(scene.position(0), Some(Pos2::new(-4.0, 0.0)));
        assert_eq!(scene.position(3), Some(Pos2::new(2.0, 0.0)));
        assert_eq!(scene.element(2).and_then(|e| e.caption.clone()), Some("[2]".into()));
    }

    #[test]
    fn test_list_scene_links_to_null() {
        let list = LinkedList::from_values(&[1, 2, 3]);
        let scene = list_scene(&list, ACCENT);
        assert_eq!(scene.len(), 4);
        assert_eq!(scene.edges.len(), 3);
        assert_eq!(scene.edges.last().map(|e| e.to), Some(NULL_MARKER));
        let head = list.head().map(|h| h as ElementId);
        assert_eq!(scene.elements[0].caption.as_deref(), Some("HEAD"));
        assert_eq!(Some(scene.elements[0].id), head);
    }

    #[test]
    fn test_empty_list_has_no_marker() {
        assert!(list_scene(&LinkedList::new(), ACCENT).is_empty());
    }

    #[test]
    fn test_tree_layout_shrinks_per_level() {
        let tree = BinarySearchTree::seeded();
        let scene = tree_scene(&tree, ACCENT);
        assert_eq!(scene.len(), 7);
        assert_eq!(scene.edges.len(), 6);
        let root = tree.root().unwrap();
        let left = tree.left(root).unwrap();
        let left_left = tree.left(left).unwrap();
        assert_eq!(scene.position(root as ElementId), Some(Pos2::new(0.0, 4.0)));
        assert_eq!(scene.position(left as ElementId), Some(Pos2::new(-4.0, 1.0)));
        let ll = scene.position(left_left as ElementId).unwrap();
        assert!((ll.x - (-6.4)).abs() < 1e-4);
        assert!((ll.y - (-2.0)).abs() < 1e-4);
    }

    #[test]
    fn test_heap_slot_positions() {
        assert_eq!(heap_slot_position(0), Pos2::new(0.0, 4.0));
        assert_eq!(heap_slot_position(1), Pos2::new(-2.0, 1.5));
        assert_eq!(heap_slot_position(2), Pos2::new(2.0, 1.5));
        assert_eq!(heap_slot_position(3), Pos2::new(-3.0, -1.0));
        assert_eq!(heap_slot_position(6), Pos2::new(3.0, -1.0));
    }

    #[test]
    fn test_btree_children_split_spacing() {
        let tree = BTreeDemo::seeded();
        let scene = btree_scene(&tree, ACCENT);
        assert_eq!(scene.len(), 5);
        let xs: Vec<f32> = (1..5).filter_map(|id| scene.position(id)).map(|p| p.x).collect();
        assert_eq!(xs, vec![-4.5, -1.5, 1.5, 4.5]);
        assert_eq!(scene.element(0).map(|e| e.size.x), Some(3.0 * 1.4));
    }
}
