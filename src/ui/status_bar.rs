//! Status bar UI rendering
//!
//! Memory usage, a one-line summary of the active tab and whether anything
//! is animating.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::state::Tab;
use crate::utils::{MemoryGauge, format_memory_mb};

pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, memory: &mut MemoryGauge) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(memory.read_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(active_summary(state)).strong());

        if state.any_busy() {
            ui.label(RichText::new("|").strong());
            ui.label(
                RichText::new("Animating")
                    .strong()
                    .color(state.theme.palette().highlight),
            );
        }
        if state.problems.is_running() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new("Judging...").strong());
        }
    });
}

fn active_summary(state: &AppState) -> String {
    match state.layout.active_tab() {
        Tab::Array => format!("Array: {} elements", state.array.model().len()),
        Tab::LinkedList => format!("Linked List: {} nodes", state.list.list().len()),
        Tab::BinaryTree => format!(
            "BST: {} nodes, height {}",
            state.tree.tree().len(),
            state.tree.tree().height()
        ),
        Tab::Heap => format!("{}: {} elements", state.heap.kind().label(), state.heap.heap().len()),
        Tab::BTree => format!(
            "B-Tree: t = {}, {} nodes",
            state.btree.tree().degree(),
            state.btree.tree().node_count()
        ),
        Tab::Search => format!(
            "{} over {} sorted values",
            state.search.algorithm().label(),
            state.search.values().len()
        ),
        Tab::Traversal => format!("Traversal: {}", state.traversal.model().order().label()),
        Tab::Problems => match state.problems.session() {
            Some(session) => {
                let result = session
                    .summary()
                    .map(|(passed, total)| format!(", last run {passed}/{total}"))
                    .unwrap_or_default();
                format!(
                    "{} ({}){}",
                    session.problem().title,
                    session.language().label(),
                    result
                )
            }
            None => "No problems loaded".to_string(),
        },
        Tab::Compare => "Array vs Linked List".to_string(),
    }
}
