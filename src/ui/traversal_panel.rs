//! Traversal tab.

use eframe::egui;
use egui::RichText;
use rdsviz::scene::builders::tree_scene;
use rdsviz::{Topic, TraversalOrder};

use crate::app::AppState;
use crate::presentation::color_mapping::accent_for;
use crate::rendering::scene_renderer::paint_scene;
use crate::state::AnimatedWidget;
use crate::ui::controls::{CANVAS_HEIGHT, action_button, cancel_button, panel_heading};
use crate::ui::panel_manager::{PanelInteraction, WidgetAction};
use crate::utils::format_values;

pub fn render_traversal_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;
    let palette = state.theme.palette();
    let traversal = &mut state.traversal;
    let busy = traversal.is_busy();
    let order = traversal.model().order();

    panel_heading(ui, "Tree Traversal", order.rule());

    let scene = tree_scene(traversal.model().tree(), accent_for(Topic::Traversal, palette));
    paint_scene(ui, &scene, traversal.sequencer(), palette, CANVAS_HEIGHT);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let mut selected = order;
        egui::ComboBox::from_id_salt("traversal_order")
            .selected_text(order.label())
            .show_ui(ui, |ui| {
                for option in TraversalOrder::ALL {
                    ui.selectable_value(&mut selected, option, option.label());
                }
            });
        if selected != order {
            interaction = Some(PanelInteraction::Widget(WidgetAction::TraversalOrder(selected)));
        }
        if action_button(ui, busy, "Start") {
            interaction = Some(PanelInteraction::Widget(WidgetAction::TraversalStart));
        }
        if action_button(ui, busy, "Reset") {
            interaction = Some(PanelInteraction::Widget(WidgetAction::TraversalReset));
        }
        if let Some(cancel) = cancel_button(ui, busy, Topic::Traversal) {
            interaction = Some(cancel);
        }
    });

    let visited = traversal.visited_values();
    let text = if visited.is_empty() {
        "Visited: (none yet)".to_string()
    } else {
        format!("Visited: {}", format_values(&visited))
    };
    ui.label(RichText::new(text).monospace());

    interaction
}
