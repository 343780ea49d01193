//! Problems tab: pick a problem, edit a solution, run the simulated judge.

use eframe::egui;
use egui::{Color32, RichText};
use rdsviz::judge::{JudgeReport, Language, Problem, Severity, catalog};
use rdsviz::VizPalette;

use crate::app::AppState;
use crate::presentation::color_mapping::{case_color, difficulty_color, verdict_color};
use crate::ui::panel_manager::{PanelInteraction, ProblemAction};

pub fn render_problem_panel(ui: &mut egui::Ui, state: &mut AppState) -> Option<PanelInteraction> {
    let mut interaction = None;
    let palette = state.theme.palette();
    let problems = &mut state.problems;

    let running = problems.is_running();
    if problems.session().is_none() {
        ui.heading("Problems");
        ui.colored_label(Color32::RED, problems.error().unwrap_or("Problem catalog unavailable"));
        return None;
    }
    let Some(session) = problems.session_mut() else {
        return None;
    };
    let problem = session.problem();
    let language = session.language();

    // Problem and language pickers
    ui.horizontal(|ui| {
        ui.label("Problem:");
        let mut selected = problem.id.clone();
        egui::ComboBox::from_id_salt("problem_selector")
            .selected_text(problem.title.as_str())
            .width(260.0)
            .show_ui(ui, |ui| {
                for p in catalog::problems().unwrap_or_default() {
                    ui.selectable_value(&mut selected, p.id.clone(), p.title.as_str());
                }
            });
        if selected != problem.id {
            interaction = Some(PanelInteraction::Problem(ProblemAction::Select(selected)));
        }

        ui.label(
            RichText::new(problem.difficulty.label())
                .strong()
                .color(difficulty_color(problem.difficulty, palette)),
        );

        ui.separator();
        ui.label("Language:");
        let mut selected_language = language;
        egui::ComboBox::from_id_salt("language_selector")
            .selected_text(language.label())
            .show_ui(ui, |ui| {
                for option in Language::ALL {
                    ui.selectable_value(&mut selected_language, option, option.label());
                }
            });
        if selected_language != language {
            interaction = Some(PanelInteraction::Problem(ProblemAction::SetLanguage(
                selected_language,
            )));
        }
    });
    ui.separator();

    ui.columns(2, |columns| {
        egui::ScrollArea::vertical()
            .id_salt("problem_statement")
            .show(&mut columns[0], |ui| {
                render_statement(ui, problem);
            });

        let ui = &mut columns[1];
        ui.horizontal(|ui| {
            ui.add_enabled_ui(!running, |ui| {
                if ui.button("📁 Load Solution").clicked() {
                    if let Some(path) = pick_solution_file(language) {
                        interaction = Some(PanelInteraction::LoadSolutionRequested(path));
                    }
                }
                if ui.button("↺ Reset").clicked() {
                    interaction = Some(PanelInteraction::Problem(ProblemAction::ResetCode));
                }
                if ui.button("▶ Run Tests").clicked() {
                    interaction = Some(PanelInteraction::Problem(ProblemAction::RunTests));
                }
            });
            if running {
                ui.spinner();
                ui.label("Compiling and running...");
            }
        });

        egui::ScrollArea::vertical()
            .id_salt("code_editor")
            .max_height(ui.available_height() * 0.6)
            .show(ui, |ui| {
                ui.add_enabled(
                    !running,
                    egui::TextEdit::multiline(session.code_mut())
                        .code_editor()
                        .desired_rows(18)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.separator();
        egui::ScrollArea::vertical()
            .id_salt("judge_results")
            .show(ui, |ui| match session.report() {
                Some(report) => render_report(ui, report, palette),
                None if !running => {
                    ui.label(RichText::new("Run the tests to see results.").weak());
                }
                None => {}
            });
    });

    if let Some(error) = problems.error() {
        ui.colored_label(Color32::RED, error);
    }

    interaction
}

fn render_statement(ui: &mut egui::Ui, problem: &Problem) {
    ui.heading(problem.title.as_str());
    ui.label(problem.description.as_str());
    ui.add_space(6.0);

    for (i, example) in problem.examples.iter().enumerate() {
        ui.label(RichText::new(format!("Example {}", i + 1)).strong());
        ui.label(RichText::new(format!("Input: {}", example.input)).monospace());
        ui.label(RichText::new(format!("Output: {}", example.output)).monospace());
        if let Some(explanation) = &example.explanation {
            ui.label(format!("Explanation: {explanation}"));
        }
        ui.add_space(4.0);
    }

    ui.label(RichText::new("Constraints").strong());
    for constraint in &problem.constraints {
        ui.label(format!("• {constraint}"));
    }
    ui.add_space(6.0);

    ui.label(RichText::new("Test Cases").strong());
    for (i, case) in problem.visible_cases().enumerate() {
        ui.label(
            RichText::new(format!(
                "{}. {}  →  {}",
                i + 1,
                case.input,
                case.expected_output
            ))
            .monospace(),
        );
    }
    let hidden = problem.hidden_count();
    if hidden > 0 {
        ui.label(RichText::new(format!("+ {hidden} hidden test case(s)")).italics());
    }
}

fn render_report(ui: &mut egui::Ui, report: &JudgeReport, palette: &VizPalette) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(report.verdict.label())
                .strong()
                .color(verdict_color(&report.verdict, palette)),
        );
        ui.label(format!("{} passed", report.summary()));
    });

    for diagnostic in &report.check.diagnostics {
        let color = match diagnostic.severity {
            Severity::Info => ui.visuals().weak_text_color(),
            Severity::Warning => palette.range,
            Severity::Error => palette.highlight,
        };
        ui.colored_label(color, diagnostic.message.as_str());
    }

    for (i, case) in report.visible().enumerate() {
        let mark = if case.passed { "✔" } else { "✘" };
        ui.label(
            RichText::new(format!("{mark} Case {}: {}", i + 1, case.input))
                .color(case_color(case.passed, palette)),
        );
        if !case.passed {
            ui.label(
                RichText::new(format!(
                    "    expected {}, got {}",
                    case.expected, case.actual
                ))
                .monospace(),
            );
        }
    }

    let hidden: Vec<_> = report.hidden().collect();
    if !hidden.is_empty() {
        let passed = hidden.iter().filter(|c| c.passed).count();
        ui.label(
            RichText::new(format!("Hidden cases: {passed}/{} passed", hidden.len()))
                .color(case_color(passed == hidden.len(), palette)),
        );
    }
}

fn pick_solution_file(language: Language) -> Option<std::path::PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .add_filter(language.label(), &[language.extension()])
        .add_filter("All Solutions", &["java", "cpp", "cc", "py"]);
    if let Ok(cwd) = std::env::current_dir() {
        dialog = dialog.set_directory(cwd);
    }
    dialog.pick_file()
}
