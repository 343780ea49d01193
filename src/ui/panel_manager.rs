//! Panel orchestration and layout management.
//!
//! Lays out header, status bar, facts side panel and the active tab, and
//! collects what the user asked for into a [`PanelInteraction`] for the
//! application coordinator.

use std::path::PathBuf;

use eframe::egui;
use rdsviz::{Language, SearchAlgorithm, Topic, TraversalOrder};

use crate::app::AppState;
use crate::state::Tab;
use crate::ui::{
    array_panel, btree_panel, compare_panel, facts_panel, header, heap_panel, list_panel,
    problem_panel, search_panel, status_bar, traversal_panel, tree_panel,
};
use crate::utils::MemoryGauge;

/// Structure operations requested from a visualizer tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    ArrayPush,
    ArrayAccess,
    ArrayPop,
    ListPrepend,
    ListRemoveHead,
    ListTraverse,
    TreeInsert,
    TreeSearch,
    HeapInsert,
    HeapExtract,
    HeapToggleKind,
    BTreeInsert,
    BTreeSearch,
    BTreeApplyDegree,
    SearchAlgorithm(SearchAlgorithm),
    SearchRun,
    TraversalOrder(TraversalOrder),
    TraversalStart,
    TraversalReset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemAction {
    Select(String),
    SetLanguage(Language),
    ResetCode,
    RunTests,
}

/// Result of panel interactions that need to be handled by the application coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelInteraction {
    Widget(WidgetAction),
    /// Stop the sequence running in a visualizer
    CancelAnimation(Topic),
    Problem(ProblemAction),
    /// User picked a solution file to load into the editor
    LoadSolutionRequested(PathBuf),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders every panel. Called from `eframe::App::update`.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        memory: &mut MemoryGauge,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render_header(ui, state);
        });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, memory);
        });

        let tab = state.layout.active_tab();
        if let Some(topic) = tab.topic() {
            egui::SidePanel::right("facts_panel")
                .default_width(ctx.content_rect().width() * 0.28)
                .resizable(true)
                .show(ctx, |ui| {
                    egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                        facts_panel::render_facts_panel(ui, topic);
                    });
                });
        }

        let central_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(8))
            .fill(ctx.style().visuals.panel_fill);

        egui::CentralPanel::default()
            .frame(central_frame)
            .show(ctx, |ui| {
                interaction = match tab {
                    Tab::Array => array_panel::render_array_panel(ui, state),
                    Tab::LinkedList => list_panel::render_list_panel(ui, state),
                    Tab::BinaryTree => tree_panel::render_tree_panel(ui, state),
                    Tab::Heap => heap_panel::render_heap_panel(ui, state),
                    Tab::BTree => btree_panel::render_btree_panel(ui, state),
                    Tab::Search => search_panel::render_search_panel(ui, state),
                    Tab::Traversal => traversal_panel::render_traversal_panel(ui, state),
                    Tab::Problems => problem_panel::render_problem_panel(ui, state),
                    Tab::Compare => {
                        compare_panel::render_compare_panel(ui, state.theme.palette());
                        None
                    }
                };
            });

        interaction
    }
}
