//! Compare tab: arrays against linked lists.

use eframe::egui;
use egui::RichText;
use rdsviz::comparison::{self, Better, ROWS, TAKEAWAY, WHEN_ARRAY, WHEN_LINKED_LIST};
use rdsviz::{Topic, VizPalette};

use crate::presentation::color_mapping::accent_for;

pub fn render_compare_panel(ui: &mut egui::Ui, palette: &VizPalette) {
    let array_color = accent_for(Topic::Array, palette);
    let list_color = accent_for(Topic::LinkedList, palette);

    ui.heading("Array vs Linked List");
    ui.add_space(6.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("comparison_grid")
            .striped(true)
            .num_columns(3)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Aspect").strong());
                ui.label(RichText::new("Array").strong().color(array_color));
                ui.label(RichText::new("Linked List").strong().color(list_color));
                ui.end_row();

                for row in &ROWS {
                    let (array_text, list_text) = match row.better {
                        Better::Array => (
                            RichText::new(format!("✔ {}", row.array)).color(array_color),
                            RichText::new(row.linked_list),
                        ),
                        Better::LinkedList => (
                            RichText::new(row.array),
                            RichText::new(format!("✔ {}", row.linked_list)).color(list_color),
                        ),
                    };
                    ui.label(RichText::new(row.aspect).strong());
                    ui.label(array_text);
                    ui.label(list_text);
                    ui.end_row();
                }
            });

        let (array_wins, list_wins) = comparison::tally();
        ui.add_space(6.0);
        ui.label(format!("Array wins {array_wins} aspects, linked list wins {list_wins}."));
        ui.add_space(10.0);

        ui.columns(2, |columns| {
            columns[0].label(RichText::new("Use arrays").strong().color(array_color));
            for item in WHEN_ARRAY {
                columns[0].label(format!("• {item}"));
            }
            columns[1].label(RichText::new("Use linked lists").strong().color(list_color));
            for item in WHEN_LINKED_LIST {
                columns[1].label(format!("• {item}"));
            }
        });

        ui.add_space(10.0);
        ui.label(RichText::new(TAKEAWAY).italics());
    });
}
