//! Colours for topics, badges and verdicts.
//!
//! Everything is looked up from the active [`VizPalette`] so themes stay
//! the single source of colour.

use egui::Color32;
use rdsviz::judge::{Difficulty, Verdict};
use rdsviz::{Topic, VizPalette};

/// Accent a visualizer paints its elements with.
pub fn accent_for(topic: Topic, palette: &VizPalette) -> Color32 {
    match topic {
        Topic::Array => palette.array,
        Topic::LinkedList => palette.list,
        Topic::BinaryTree => palette.tree,
        Topic::Heap => palette.heap,
        Topic::BTree => palette.btree,
        Topic::Search => palette.search,
        Topic::Traversal => palette.traversal,
    }
}

pub fn difficulty_color(difficulty: Difficulty, palette: &VizPalette) -> Color32 {
    match difficulty {
        Difficulty::Easy => palette.easy,
        Difficulty::Medium => palette.medium,
        Difficulty::Hard => palette.hard,
    }
}

pub fn verdict_color(verdict: &Verdict, palette: &VizPalette) -> Color32 {
    match verdict {
        Verdict::Accepted => palette.visited,
        Verdict::WrongAnswer { .. } | Verdict::CompileError => palette.highlight,
        Verdict::NoTestCases => palette.eliminated,
    }
}

/// Pass/fail colour for a single test case row.
pub fn case_color(passed: bool, palette: &VizPalette) -> Color32 {
    if passed {
        palette.visited
    } else {
        palette.highlight
    }
}
