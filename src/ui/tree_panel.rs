//! Binary search tree tab.

use eframe::egui;
use rdsviz::scene::builders::tree_scene;
use rdsviz::{Topic, TraversalOrder};

use crate::app::AppState;
use crate::presentation::color_mapping::accent_for;
use crate::rendering::scene_renderer::paint_scene;
use crate::state::AnimatedWidget;
use crate::ui::controls::{CANVAS_HEIGHT, action_button, cancel_button, number_input, panel_heading};
use crate::ui::panel_manager::{PanelInteraction, WidgetAction};
use crate::utils::format_values;

pub fn render_tree_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;
    let palette = state.theme.palette();
    let tree = &mut state.tree;
    let busy = tree.is_busy();

    panel_heading(ui, "Binary Search Tree", tree.status());

    let scene = tree_scene(tree.tree(), accent_for(Topic::BinaryTree, palette));
    paint_scene(ui, &scene, tree.sequencer(), palette, CANVAS_HEIGHT);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let submitted = number_input(ui, tree.insert_text_mut(), "value");
        if action_button(ui, busy, "Insert") || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::TreeInsert));
        }
        ui.separator();
        let submitted = number_input(ui, tree.search_text_mut(), "value");
        if action_button(ui, busy, "Search") || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::TreeSearch));
        }
        if let Some(cancel) = cancel_button(ui, busy, Topic::BinaryTree) {
            interaction = Some(cancel);
        }
    });

    ui.label(format!(
        "{} nodes, height {}. In-order: {}",
        tree.tree().len(),
        tree.tree().height(),
        format_values(&tree.tree().traverse_values(TraversalOrder::InOrder))
    ));

    interaction
}
