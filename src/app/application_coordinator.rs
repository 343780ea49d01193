//! Application-level coordination and workflow management.
//!
//! Turns panel interactions into state mutations, drives the per-frame
//! animation clock and collects finished judge runs.

use std::path::PathBuf;
use std::time::Duration;

use rdsviz::Topic;
use tracing::{debug, info, warn};

use crate::app::AppState;
use crate::io::{AsyncJudge, JudgeResult, read_solution};
use crate::ui::panel_manager::{PanelInteraction, ProblemAction, WidgetAction};

/// Frame times above this are treated as a stall, not as animation time.
const MAX_FRAME_DT: Duration = Duration::from_millis(250);

/// Coordinates application-level operations and workflows.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Dispatches one interaction reported by the panels this frame.
    pub fn handle_interaction(
        state: &mut AppState,
        judge: &mut AsyncJudge,
        interaction: PanelInteraction,
        ctx: &egui::Context,
    ) {
        match interaction {
            PanelInteraction::Widget(action) => Self::handle_widget_action(state, action),
            PanelInteraction::CancelAnimation(topic) => Self::cancel_animation(state, topic),
            PanelInteraction::Problem(action) => {
                Self::handle_problem_action(state, judge, action, ctx)
            }
            PanelInteraction::LoadSolutionRequested(path) => Self::load_solution(state, path),
        }
    }

    /// Runs a structure operation against the active palette.
    pub fn handle_widget_action(state: &mut AppState, action: WidgetAction) {
        let palette = state.theme.palette().clone();
        match action {
            WidgetAction::ArrayPush => state.array.push(),
            WidgetAction::ArrayAccess => state.array.access(&palette),
            WidgetAction::ArrayPop => state.array.pop(),
            WidgetAction::ListPrepend => state.list.prepend(),
            WidgetAction::ListRemoveHead => state.list.remove_head(),
            WidgetAction::ListTraverse => state.list.traverse(&palette),
            WidgetAction::TreeInsert => state.tree.insert(&palette),
            WidgetAction::TreeSearch => state.tree.search(&palette),
            WidgetAction::HeapInsert => state.heap.insert(&palette),
            WidgetAction::HeapExtract => state.heap.extract_root(&palette),
            WidgetAction::HeapToggleKind => state.heap.toggle_kind(),
            WidgetAction::BTreeInsert => state.btree.insert(&palette),
            WidgetAction::BTreeSearch => state.btree.search(&palette),
            WidgetAction::BTreeApplyDegree => state.btree.apply_degree(),
            WidgetAction::SearchAlgorithm(algorithm) => state.search.set_algorithm(algorithm),
            WidgetAction::SearchRun => state.search.run(&palette),
            WidgetAction::TraversalOrder(order) => state.traversal.set_order(order),
            WidgetAction::TraversalStart => state.traversal.start(&palette),
            WidgetAction::TraversalReset => state.traversal.reset(),
        }
    }

    pub fn cancel_animation(state: &mut AppState, topic: Topic) {
        if state.widget_mut(topic).cancel() {
            info!(widget = topic.label(), "animation cancelled");
        }
    }

    pub fn handle_problem_action(
        state: &mut AppState,
        judge: &mut AsyncJudge,
        action: ProblemAction,
        ctx: &egui::Context,
    ) {
        match action {
            ProblemAction::Select(id) => state.problems.select_problem(&id),
            ProblemAction::SetLanguage(language) => state.problems.set_language(language),
            ProblemAction::ResetCode => state.problems.reset_code(),
            ProblemAction::RunTests => {
                if state.problems.is_running() {
                    debug!("judge run already in flight");
                    return;
                }
                let Some(submission) = state.problems.session().map(|s| s.submission()) else {
                    return;
                };
                state.problems.mark_running();
                judge.start(submission, ctx);
            }
        }
    }

    /// Loads a solution file into the editor.
    pub fn load_solution(state: &mut AppState, path: PathBuf) {
        match read_solution(&path) {
            Ok((code, language)) => {
                info!(path = %path.display(), "solution loaded");
                state.problems.load_solution(code, language);
                state.error_message = None;
            }
            Err(e) => {
                warn!("{e:#}");
                state.error_message = Some(format!("Error loading solution: {e:#}"));
            }
        }
    }

    /// Advances every sequencer by this frame's time scaled by the speed
    /// multiplier, and keeps frames coming while anything moves.
    pub fn advance_animations(state: &mut AppState, ctx: &egui::Context) {
        let dt = Duration::from_secs_f32(ctx.input(|i| i.stable_dt).max(0.0)).min(MAX_FRAME_DT);
        let scaled = dt.mul_f32(state.layout.animation_speed());
        if state.tick_all(scaled) {
            ctx.request_repaint();
        }
    }

    /// Applies a finished judge run. Returns true when one completed.
    pub fn check_judge_completion(state: &mut AppState, judge: &mut AsyncJudge) -> bool {
        match judge.check_completion() {
            JudgeResult::Success(report) => {
                info!(
                    problem = report.problem_id.as_str(),
                    passed = report.passed(),
                    total = report.total(),
                    verdict = %report.verdict.label(),
                    "judge run finished"
                );
                state.problems.finish(report);
                true
            }
            JudgeResult::Error(message) => {
                state.problems.fail(message.clone());
                state.error_message = Some(format!("Error running tests: {message}"));
                true
            }
            JudgeResult::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_actions_route_to_state() {
        let mut state = AppState::new();
        *state.array.value_text_mut() = "7".to_string();
        ApplicationCoordinator::handle_widget_action(&mut state, WidgetAction::ArrayPush);
        assert_eq!(state.array.model().as_slice().last(), Some(&7));

        ApplicationCoordinator::handle_widget_action(&mut state, WidgetAction::TraversalStart);
        assert!(state.any_busy());
        ApplicationCoordinator::cancel_animation(&mut state, Topic::Traversal);
        state.tick_all(Duration::ZERO);
        assert!(!state.any_busy());
    }

    #[test]
    fn test_missing_solution_sets_error() {
        let mut state = AppState::new();
        ApplicationCoordinator::load_solution(&mut state, PathBuf::from("/no/such/solution.py"));
        assert!(state.error_message.is_some());
    }
}
