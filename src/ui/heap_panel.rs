//! Heap tab.

use eframe::egui;
use rdsviz::scene::builders::heap_scene;
use rdsviz::{HeapKind, Topic};

use crate::app::AppState;
use crate::presentation::color_mapping::accent_for;
use crate::rendering::scene_renderer::paint_scene;
use crate::state::AnimatedWidget;
use crate::ui::controls::{CANVAS_HEIGHT, action_button, cancel_button, number_input, panel_heading};
use crate::ui::panel_manager::{PanelInteraction, WidgetAction};
use crate::utils::format_values;

pub fn render_heap_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;
    let palette = state.theme.palette();
    let heap = &mut state.heap;
    let busy = heap.is_busy();

    panel_heading(ui, heap.kind().label(), heap.status());

    let scene = heap_scene(heap.display(), accent_for(Topic::Heap, palette));
    paint_scene(ui, &scene, heap.sequencer(), palette, CANVAS_HEIGHT);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let submitted = number_input(ui, heap.value_text_mut(), "value");
        if action_button(ui, busy, "Insert") || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::HeapInsert));
        }
        ui.separator();
        let extract = match heap.kind() {
            HeapKind::Max => "Extract Max",
            HeapKind::Min => "Extract Min",
        };
        if action_button(ui, busy || heap.heap().is_empty(), extract) {
            interaction = Some(PanelInteraction::Widget(WidgetAction::HeapExtract));
        }
        let toggle = format!("Switch to {}", heap.kind().flipped().label());
        if action_button(ui, busy, &toggle) {
            interaction = Some(PanelInteraction::Widget(WidgetAction::HeapToggleKind));
        }
        if let Some(cancel) = cancel_button(ui, busy, Topic::Heap) {
            interaction = Some(cancel);
        }
    });

    ui.label(format!("Array form: {}", format_values(heap.display())));

    interaction
}
