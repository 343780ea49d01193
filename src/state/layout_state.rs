//! UI layout state management.
//!
//! Which tab is showing and how fast animations play.

use rdsviz::Topic;
use serde::{Deserialize, Serialize};

pub const MIN_SPEED: f32 = 0.25;
pub const MAX_SPEED: f32 = 4.0;

/// Top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tab {
    #[default]
    Array,
    LinkedList,
    BinaryTree,
    Heap,
    BTree,
    Search,
    Traversal,
    Problems,
    Compare,
}

impl Tab {
    pub const ALL: [Tab; 9] = [
        Tab::Array,
        Tab::LinkedList,
        Tab::BinaryTree,
        Tab::Heap,
        Tab::BTree,
        Tab::Search,
        Tab::Traversal,
        Tab::Problems,
        Tab::Compare,
    ];

    pub fn label(self) -> &'static str {
        match self.topic() {
            Some(topic) => topic.label(),
            None if self == Tab::Problems => "Problems",
            None => "Compare",
        }
    }

    /// The visualizer behind the tab, if it is one.
    pub fn topic(self) -> Option<Topic> {
        match self {
            Tab::Array => Some(Topic::Array),
            Tab::LinkedList => Some(Topic::LinkedList),
            Tab::BinaryTree => Some(Topic::BinaryTree),
            Tab::Heap => Some(Topic::Heap),
            Tab::BTree => Some(Topic::BTree),
            Tab::Search => Some(Topic::Search),
            Tab::Traversal => Some(Topic::Traversal),
            Tab::Problems | Tab::Compare => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutState {
    active_tab: Tab,
    /// Multiplier applied to frame time before it reaches the sequencers.
    animation_speed: f32,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            active_tab: Tab::default(),
            animation_speed: 1.0,
        }
    }

    // ===== Layout Queries =====

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn animation_speed(&self) -> f32 {
        self.animation_speed
    }

    // ===== Layout Mutations =====

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn set_animation_speed(&mut self, speed: f32) {
        self.animation_speed = if speed.is_finite() {
            speed.clamp(MIN_SPEED, MAX_SPEED)
        } else {
            1.0
        };
    }

    /// Direct access for the header slider.
    pub(crate) fn animation_speed_mut(&mut self) -> &mut f32 {
        &mut self.animation_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_clamped() {
        let mut layout = LayoutState::new();
        layout.set_animation_speed(10.0);
        assert_eq!(layout.animation_speed(), MAX_SPEED);
        layout.set_animation_speed(f32::NAN);
        assert_eq!(layout.animation_speed(), 1.0);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(Tab::BTree.label(), "B-Tree");
        assert_eq!(Tab::Problems.label(), "Problems");
        assert_eq!(Tab::Compare.label(), "Compare");
    }
}
