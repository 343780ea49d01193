//! B-tree tab.

use eframe::egui;
use egui::RichText;
use rdsviz::Topic;
use rdsviz::scene::builders::btree_scene;

use crate::app::AppState;
use crate::presentation::color_mapping::accent_for;
use crate::rendering::scene_renderer::paint_scene;
use crate::state::AnimatedWidget;
use crate::ui::controls::{CANVAS_HEIGHT, action_button, cancel_button, number_input, panel_heading};
use crate::ui::panel_manager::{PanelInteraction, WidgetAction};

pub fn render_btree_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;
    let palette = state.theme.palette();
    let btree = &mut state.btree;
    let busy = btree.is_busy();

    panel_heading(ui, "B-Tree", btree.status());

    let scene = btree_scene(btree.tree(), accent_for(Topic::BTree, palette));
    paint_scene(ui, &scene, btree.sequencer(), palette, CANVAS_HEIGHT);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let submitted = number_input(ui, btree.key_text_mut(), "key");
        if action_button(ui, busy, "Insert") || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::BTreeInsert));
        }
        if action_button(ui, busy, "Search") {
            interaction = Some(PanelInteraction::Widget(WidgetAction::BTreeSearch));
        }
        ui.separator();
        ui.label("Degree t:");
        let submitted = number_input(ui, btree.degree_text_mut(), "2-5");
        if ui.button("Apply").clicked() || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::BTreeApplyDegree));
        }
        if let Some(cancel) = cancel_button(ui, busy, Topic::BTree) {
            interaction = Some(cancel);
        }
    });

    let tree = btree.tree();
    ui.label(format!(
        "{} nodes, root holds up to {} keys.",
        tree.node_count(),
        tree.capacity()
    ));
    ui.label(
        RichText::new("Demo only: keys go into the root and nodes never split.")
            .small()
            .weak(),
    );

    interaction
}
