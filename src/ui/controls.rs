//! Small widgets shared by the visualizer panels.

use eframe::egui;
use egui::RichText;
use rdsviz::Topic;

use crate::ui::panel_manager::PanelInteraction;

/// Height of every structure canvas.
pub const CANVAS_HEIGHT: f32 = 320.0;

/// Single-line numeric input. Returns true when Enter was pressed in it.
pub fn number_input(ui: &mut egui::Ui, text: &mut String, hint: &str) -> bool {
    let response = egui::TextEdit::singleline(text)
        .hint_text(hint)
        .desired_width(70.0)
        .show(ui)
        .response;
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}

/// A button disabled while the widget animates.
pub fn action_button(ui: &mut egui::Ui, busy: bool, label: &str) -> bool {
    ui.add_enabled(!busy, egui::Button::new(label)).clicked()
}

/// Cancel button, only shown while a sequence runs.
pub fn cancel_button(ui: &mut egui::Ui, busy: bool, topic: Topic) -> Option<PanelInteraction> {
    if busy && ui.button("⏹ Cancel").clicked() {
        return Some(PanelInteraction::CancelAnimation(topic));
    }
    None
}

/// Heading with the widget's last status message underneath.
pub fn panel_heading(ui: &mut egui::Ui, title: &str, status: &str) {
    ui.heading(title);
    if status.is_empty() {
        ui.label(RichText::new(" ").small());
    } else {
        ui.label(RichText::new(status).italics());
    }
}
