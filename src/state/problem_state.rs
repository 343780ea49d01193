//! Problems tab state.
//!
//! Wraps a [`JudgeSession`] with the bits only the GUI cares about: whether
//! a background run is in flight and the last error to show.

use rdsviz::judge::JudgeReport;
use rdsviz::{JudgeSession, Language};
use tracing::{info, warn};

#[derive(Debug, Default)]
pub struct ProblemState {
    /// `None` when the embedded catalog failed to load.
    session: Option<JudgeSession>,
    running: bool,
    error: Option<String>,
}

impl ProblemState {
    /// Opens the first problem in `language`.
    pub fn new(language: Language) -> Self {
        let first = rdsviz::judge::catalog::first().map(|p| p.id.clone());
        match first.and_then(|id| JudgeSession::with(&id, language)) {
            Ok(session) => Self {
                session: Some(session),
                ..Self::default()
            },
            Err(e) => {
                warn!("problem catalog unavailable: {e}");
                Self {
                    error: Some(e.to_string()),
                    ..Self::default()
                }
            }
        }
    }

    // ===== Queries =====

    pub fn session(&self) -> Option<&JudgeSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut JudgeSession> {
        self.session.as_mut()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn language(&self) -> Language {
        self.session
            .as_ref()
            .map(JudgeSession::language)
            .unwrap_or_default()
    }

    // ===== Mutations =====

    /// Switching is refused while a run is in flight.
    pub fn select_problem(&mut self, id: &str) {
        if self.running {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.select_problem(id) {
                self.error = Some(e.to_string());
            } else {
                self.error = None;
            }
        }
    }

    pub fn set_language(&mut self, language: Language) {
        if self.running {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            if session.language() != language {
                session.set_language(language);
                info!(language = language.key(), "judge language changed");
            }
        }
    }

    pub fn reset_code(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.reset_code();
        }
    }

    /// Replaces the buffer with a loaded file, switching language first
    /// when the file extension names one.
    pub fn load_solution(&mut self, code: String, language: Option<Language>) {
        if self.running {
            return;
        }
        if let Some(language) = language {
            self.set_language(language);
        }
        if let Some(session) = self.session.as_mut() {
            session.set_code(code);
            session.clear_results();
        }
        self.error = None;
    }

    pub fn mark_running(&mut self) {
        self.running = true;
        self.error = None;
        if let Some(session) = self.session.as_mut() {
            session.clear_results();
        }
    }

    pub fn finish(&mut self, report: JudgeReport) {
        self.running = false;
        if let Some(session) = self.session.as_mut() {
            if !session.accept_report(report) {
                warn!("discarded judge report for a stale selection");
            }
        }
    }

    pub fn fail(&mut self, error: String) {
        self.running = false;
        self.error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdsviz::HeuristicBackend;
    use rdsviz::judge::ExecutionBackend;

    #[test]
    fn test_run_lifecycle() {
        let mut state = ProblemState::new(Language::Java);
        assert_eq!(state.language(), Language::Java);

        state.mark_running();
        let submission = state.session().unwrap().submission();
        state.select_problem("binary-search"); // refused mid-run
        let report = HeuristicBackend::seeded(1).judge(&submission);
        state.finish(report);

        assert!(!state.is_running());
        assert_eq!(state.session().unwrap().problem().id, "two-sum");
        assert!(state.session().unwrap().report().is_some());
    }

    #[test]
    fn test_load_solution_switches_language() {
        let mut state = ProblemState::new(Language::Python);
        state.load_solution("int x;".to_string(), Some(Language::Cpp));
        let session = state.session().unwrap();
        assert_eq!(session.language(), Language::Cpp);
        assert_eq!(session.code(), "int x;");
    }

    #[test]
    fn test_unknown_problem_sets_error() {
        let mut state = ProblemState::new(Language::Python);
        state.select_problem("missing");
        assert!(state.error().is_some());
    }
}
