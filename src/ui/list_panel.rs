//! Linked list tab.

use eframe::egui;
use rdsviz::Topic;
use rdsviz::scene::builders::list_scene;

use crate::app::AppState;
use crate::presentation::color_mapping::accent_for;
use crate::rendering::scene_renderer::paint_scene;
use crate::state::AnimatedWidget;
use crate::ui::controls::{CANVAS_HEIGHT, action_button, cancel_button, number_input, panel_heading};
use crate::ui::panel_manager::{PanelInteraction, WidgetAction};
use crate::utils::format_values;

pub fn render_list_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;
    let palette = state.theme.palette();
    let list = &mut state.list;
    let busy = list.is_busy();

    panel_heading(ui, "Linked List", list.status());

    let scene = list_scene(list.list(), accent_for(Topic::LinkedList, palette));
    paint_scene(ui, &scene, list.sequencer(), palette, CANVAS_HEIGHT);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let submitted = number_input(ui, list.value_text_mut(), "value");
        if action_button(ui, busy, "Insert at Head") || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::ListPrepend));
        }
        ui.separator();
        let can_remove = list.list().len() > 1;
        if action_button(ui, busy || !can_remove, "Remove Head") {
            interaction = Some(PanelInteraction::Widget(WidgetAction::ListRemoveHead));
        }
        if action_button(ui, busy, "Traverse") {
            interaction = Some(PanelInteraction::Widget(WidgetAction::ListTraverse));
        }
        if let Some(cancel) = cancel_button(ui, busy, Topic::LinkedList) {
            interaction = Some(cancel);
        }
    });

    ui.label(format!("Chain: {} → NULL", format_values(&list.list().to_vec())));

    interaction
}
