//! Background judge runs.
//!
//! The simulated judge pauses for a compile delay before reporting, so it
//! runs on a worker thread and the GUI polls for the report once per frame.

use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use eframe::egui;
use rdsviz::animation::timing::JUDGE_DELAY;
use rdsviz::judge::{ExecutionBackend, JudgeReport, Submission};
use rdsviz::HeuristicBackend;
use tracing::{info, warn};

use crate::io::RunState;

/// Outcome of polling a run.
#[derive(Debug)]
pub enum JudgeResult {
    Success(JudgeReport),
    Error(String),
    /// Nothing finished this frame (or nothing was started).
    None,
}

pub struct AsyncJudge {
    run_state: Arc<Mutex<RunState>>,
    receiver: Option<Receiver<Result<JudgeReport, String>>>,
    delay: Duration,
    seed: Option<u64>,
}

impl AsyncJudge {
    pub fn new() -> Self {
        Self {
            run_state: Arc::new(Mutex::new(RunState::new())),
            receiver: None,
            delay: JUDGE_DELAY,
            seed: None,
        }
    }

    /// Overrides the simulated compile delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes every run reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn is_running(&self) -> bool {
        self.run_state
            .lock()
            .map(|state| state.in_progress)
            .unwrap_or(false)
    }

    /// Starts judging `submission` on a worker thread. A run already in
    /// flight is abandoned; its report will never be delivered.
    pub fn start(&mut self, submission: Submission, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.set_in_progress(true);

        let run_state = Arc::clone(&self.run_state);
        let ctx_handle = ctx.clone();
        let delay = self.delay;
        let seed = self.seed;

        info!(
            problem = submission.problem.id.as_str(),
            language = submission.language.key(),
            "judge run started"
        );

        thread::spawn(move || {
            thread::sleep(delay);

            let mut backend = match seed {
                Some(seed) => HeuristicBackend::seeded(seed),
                None => HeuristicBackend::new(),
            };
            let report = backend.judge(&submission);

            // Receiver may be gone if a newer run replaced this one.
            let _ = sender.send(Ok(report));

            if let Ok(mut state) = run_state.lock() {
                state.in_progress = false;
            }
            ctx_handle.request_repaint();
        });
    }

    /// Polls for a finished run. Call once per frame.
    pub fn check_completion(&mut self) -> JudgeResult {
        let Some(receiver) = &self.receiver else {
            return JudgeResult::None;
        };
        let result = match receiver.try_recv() {
            Ok(Ok(report)) => JudgeResult::Success(report),
            Ok(Err(message)) => JudgeResult::Error(message),
            Err(TryRecvError::Empty) => return JudgeResult::None,
            Err(TryRecvError::Disconnected) => {
                warn!("judge worker exited without a report");
                self.set_in_progress(false);
                JudgeResult::Error("judge worker exited without a report".to_string())
            }
        };
        self.receiver = None;
        result
    }

    fn set_in_progress(&self, value: bool) {
        if let Ok(mut state) = self.run_state.lock() {
            state.in_progress = value;
        }
    }
}

impl Default for AsyncJudge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdsviz::JudgeSession;

    #[test]
    fn test_idle_judge_has_no_result() {
        let mut judge = AsyncJudge::new();
        assert!(!judge.is_running());
        assert!(matches!(judge.check_completion(), JudgeResult::None));
    }

    #[test]
    fn test_report_arrives() {
        let ctx = egui::Context::default();
        let session = JudgeSession::new().unwrap();
        let mut judge = AsyncJudge::new().with_delay(Duration::ZERO).with_seed(9);
        judge.start(session.submission(), &ctx);

        let report = loop {
            match judge.check_completion() {
                JudgeResult::Success(report) => break report,
                JudgeResult::Error(e) => panic!("unexpected error: {e}"),
                JudgeResult::None => thread::sleep(Duration::from_millis(5)),
            }
        };
        assert_eq!(report.problem_id, "two-sum");
        assert!(matches!(judge.check_completion(), JudgeResult::None));
    }
}
