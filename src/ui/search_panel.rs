//! Search tab.

use eframe::egui;
use egui::RichText;
use rdsviz::scene::builders::search_scene;
use rdsviz::structures::search::binary_search_bound;
use rdsviz::{SearchAlgorithm, Topic};

use crate::app::AppState;
use crate::presentation::color_mapping::accent_for;
use crate::rendering::scene_renderer::paint_scene;
use crate::state::AnimatedWidget;
use crate::ui::controls::{CANVAS_HEIGHT, action_button, cancel_button, number_input, panel_heading};
use crate::ui::panel_manager::{PanelInteraction, WidgetAction};

pub fn render_search_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;
    let palette = state.theme.palette();
    let search = &mut state.search;
    let busy = search.is_busy();

    let algorithm = search.algorithm();
    panel_heading(
        ui,
        &format!("{} ({})", algorithm.label(), algorithm.complexity()),
        "",
    );

    let scene = search_scene(search.values(), accent_for(Topic::Search, palette));
    paint_scene(ui, &scene, search.sequencer(), palette, CANVAS_HEIGHT);

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let mut selected = algorithm;
        ui.add_enabled_ui(!busy, |ui| {
            for option in [SearchAlgorithm::Linear, SearchAlgorithm::Binary] {
                ui.selectable_value(&mut selected, option, option.label());
            }
        });
        if selected != algorithm {
            interaction = Some(PanelInteraction::Widget(WidgetAction::SearchAlgorithm(selected)));
        }
        ui.separator();
        let submitted = number_input(ui, search.target_text_mut(), "target");
        if action_button(ui, busy, "Search") || submitted {
            interaction = Some(PanelInteraction::Widget(WidgetAction::SearchRun));
        }
        if let Some(cancel) = cancel_button(ui, busy, Topic::Search) {
            interaction = Some(cancel);
        }
    });

    match search.result() {
        Some((target, outcome)) => {
            let text = match outcome.index {
                Some(index) => format!("Found {target} at index {index}"),
                None => format!("{target} not found (index -1)"),
            };
            ui.label(RichText::new(text).strong());
            ui.label(format!("Comparisons: {}", outcome.comparisons));
        }
        None if busy => {
            ui.label("Searching...");
        }
        None => {
            ui.label("Enter a target and press Search.");
        }
    }
    if algorithm == SearchAlgorithm::Binary {
        ui.label(
            RichText::new(format!(
                "At most {} comparisons for {} elements.",
                binary_search_bound(search.values().len()),
                search.values().len()
            ))
            .small()
            .weak(),
        );
    }

    interaction
}
