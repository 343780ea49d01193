//! Array tab.

use eframe::egui;
use rdsviz::Topic;
use rdsviz::scene::builders::array_scene;

use crate::app::AppState;
use crate::presentation::color_mapping::accent_for;
use crate::rendering::scene_renderer::paint_scene;
use crate::state::AnimatedWidget;
use crate::ui::controls::{CANVAS_HEIGHT, action_button, cancel_button, number_input, panel_heading};
use crate::ui::panel_manager::{PanelInteraction, WidgetAction};
use crate::utils::format_values;

pub fn render_array_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;
    let palette = state.theme.palette();
    let array = &mut state.array;
    let busy = array.is_busy();

    panel_heading(ui, "Array", array.status());

    let scene = array_scene(array.model().as_slice(), accent_for(Topic::Array, palette));
    paint_scene(ui, &scene, array.sequencer(), palette, CANVAS_HEIGHT);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let submitted = number_input(ui, array.value_text_mut(), "value");
        if action_button(ui, busy, "Push") || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::ArrayPush));
        }
        ui.separator();
        let submitted = number_input(ui, array.index_text_mut(), "index");
        if action_button(ui, busy, "Access") || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::ArrayAccess));
        }
        ui.separator();
        if action_button(ui, busy, "Pop") {
            interaction = Some(PanelInteraction::Widget(WidgetAction::ArrayPop));
        }
        if let Some(cancel) = cancel_button(ui, busy, Topic::Array) {
            interaction = Some(cancel);
        }
    });

    ui.label(format!(
        "Length {}: {}",
        array.model().len(),
        format_values(array.model().as_slice())
    ));

    interaction
}
