//! Header panel UI rendering
//!
//! Tab bar, animation speed slider and theme selector. Edits here are
//! direct state changes; nothing needs the coordinator.

use eframe::egui;
use egui::Color32;

use crate::app::AppState;
use crate::state::Tab;
use crate::state::{MAX_SPEED, MIN_SPEED};

pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui| {
        let active = state.layout.active_tab();
        for tab in Tab::ALL {
            let busy = tab.topic().is_some_and(|t| state.widget(t).is_busy())
                || (tab == Tab::Problems && state.problems.is_running());
            let label = if busy {
                format!("{} •", tab.label())
            } else {
                tab.label().to_string()
            };
            if ui.selectable_label(active == tab, label).clicked() {
                state.layout.set_active_tab(tab);
            }
        }

        // Push speed and theme controls to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });
            if old_theme != current_theme {
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }
            ui.label("Theme:");

            ui.separator();
            ui.add(
                egui::Slider::new(state.layout.animation_speed_mut(), MIN_SPEED..=MAX_SPEED)
                    .logarithmic(true)
                    .suffix("x")
                    .fixed_decimals(2),
            );
            ui.label("Speed:");
        });
    });

    if let Some(err) = state.error_message.clone() {
        ui.horizontal(|ui| {
            ui.colored_label(Color32::RED, err);
            if ui.small_button("✕").clicked() {
                state.error_message = None;
            }
        });
    }
}
