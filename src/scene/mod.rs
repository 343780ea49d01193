//! Renderer-agnostic description of what a widget shows.
//!
//! Positions are world units with y pointing up, matching the layouts the
//! builders compute. The GUI maps the scene bounds into its canvas rect and
//! applies the sequencer's per-element overlay on top.

pub mod builders;

use egui::{Color32, Pos2, Rect, Vec2};

/// Identifier shared by scene elements and animation steps.
pub type ElementId = u64;

/// Id of the trailing `NULL` marker in a list scene.
pub const NULL_MARKER: ElementId = ElementId::MAX;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Array/search cell.
    Cell,
    /// Tree or heap node.
    Circle,
    /// List node with its pointer compartment.
    ListNode,
    /// B-tree node, one compartment per key.
    KeyRow { keys: Vec<i64> },
    /// End-of-list marker.
    NullMarker,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    pub id: ElementId,
    pub label: String,
    /// Small text under the element (`[2]`, `HEAD`).
    pub caption: Option<String>,
    pub position: Pos2,
    pub size: Vec2,
    pub shape: Shape,
    pub color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeStyle {
    Line,
    Arrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: ElementId,
    pub to: ElementId,
    pub style: EdgeStyle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub elements: Vec<SceneElement>,
    pub edges: Vec<Edge>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: SceneElement) {
        self.elements.push(element);
    }

    pub fn connect(&mut self, from: ElementId, to: ElementId, style: EdgeStyle) {
        self.edges.push(Edge { from, to, style });
    }

    pub fn element(&self, id: ElementId) -> Option<&SceneElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn position(&self, id: ElementId) -> Option<Pos2> {
        self.element(id).map(|e| e.position)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// World-space box around every element, padded by `margin`.
    /// An empty scene yields a unit box around the origin.
    pub fn bounds(&self, margin: f32) -> Rect {
        let rect = self
            .elements
            .iter()
            .map(|e| Rect::from_center_size(e.position, e.size))
            .reduce(|a, b| a.union(b))
            .unwrap_or_else(|| Rect::from_center_size(Pos2::ZERO, Vec2::splat(1.0)));
        rect.expand(margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(id: ElementId, x: f32, y: f32) -> SceneElement {
        SceneElement {
            id,
            label: id.to_string(),
            caption: None,
            position: Pos2::new(x, y),
            size: Vec2::splat(1.0),
            shape: Shape::Cell,
            color: Color32::WHITE,
        }
    }

    #[test]
    fn test_bounds_cover_all_elements() {
        let mut scene = Scene::new();
        scene.push(cell(0, -2.0, 0.0));
        scene.push(cell(1, 3.0, 4.0));
        let bounds = scene.bounds(0.5);
        assert_eq!(bounds.min, Pos2::new(-3.0, -1.0));
        assert_eq!(bounds.max, Pos2::new(4.0, 5.0));
    }

    #[test]
    fn test_lookup_by_id() {
        let mut scene = Scene::new();
        scene.push(cell(7, 1.0, 2.0));
        assert_eq!(scene.position(7), Some(Pos2::new(1.0, 2.0)));
        assert!(scene.element(8).is_none());
        assert!(Scene::new().bounds(0.0).is_positive());
    }
}
