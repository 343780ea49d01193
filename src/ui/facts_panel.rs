//! Side panel with complexity facts and practice questions for a topic.

use eframe::egui;
use egui::RichText;
use rdsviz::Topic;

pub fn render_facts_panel(ui: &mut egui::Ui, topic: Topic) {
    let info = topic.info();

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.heading(info.title);
        ui.label(info.summary);
        ui.add_space(8.0);

        ui.label(RichText::new("Key Characteristics").strong());
        for item in info.characteristics {
            ui.label(format!("• {item}"));
        }

        for (heading, questions) in info.questions {
            ui.add_space(8.0);
            egui::CollapsingHeader::new(heading)
                .id_salt((topic, heading))
                .default_open(true)
                .show(ui, |ui| {
                    for question in questions {
                        ui.label(format!("• {question}"));
                    }
                });
        }
    });
}
