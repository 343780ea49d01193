//! Editing state of the Problems tab, independent of any UI.

use tracing::info;

use super::backend::{ExecutionBackend, JudgeReport, Submission};
use super::catalog::{self, Language, Problem};
use crate::error::Result;

/// Selected problem, language, code buffer and the last results.
#[derive(Debug, Clone)]
pub struct JudgeSession {
    problem: &'static Problem,
    language: Language,
    code: String,
    report: Option<JudgeReport>,
}

impl JudgeSession {
    /// First catalog problem with the default language's starter code.
    pub fn new() -> Result<Self> {
        Self::with(catalog::first()?.id.as_str(), Language::default())
    }

    pub fn with(problem_id: &str, language: Language) -> Result<Self> {
        let problem = catalog::find(problem_id)?;
        Ok(Self {
            problem,
            language,
            code: problem.starter(language).to_string(),
            report: None,
        })
    }

    pub fn problem(&self) -> &'static Problem {
        self.problem
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Editable buffer for the code editor widget.
    pub fn code_mut(&mut self) -> &mut String {
        &mut self.code
    }

    /// Replaces the buffer (loaded solution file). Results are kept.
    pub fn set_code(&mut self, code: String) {
        self.code = code;
    }

    /// Switches problem, loading its starter code and clearing results.
    pub fn select_problem(&mut self, id: &str) -> Result<()> {
        let problem = catalog::find(id)?;
        self.problem = problem;
        self.reset_code();
        info!(problem = id, "problem selected");
        Ok(())
    }

    /// Switches language, loading the starter code and clearing results.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.reset_code();
    }

    pub fn reset_code(&mut self) {
        self.code = self.problem.starter(self.language).to_string();
        self.report = None;
    }

    pub fn submission(&self) -> Submission {
        Submission {
            problem: self.problem,
            language: self.language,
            code: self.code.clone(),
        }
    }

    /// Judges synchronously and keeps the report.
    pub fn run(&mut self, backend: &mut dyn ExecutionBackend) -> &JudgeReport {
        let report = backend.judge(&self.submission());
        self.report.insert(report)
    }

    /// Stores a report computed elsewhere, unless it belongs to a problem
    /// or language that is no longer selected.
    pub fn accept_report(&mut self, report: JudgeReport) -> bool {
        if report.problem_id != self.problem.id || report.language != self.language {
            return false;
        }
        self.report = Some(report);
        true
    }

    pub fn report(&self) -> Option<&JudgeReport> {
        self.report.as_ref()
    }

    pub fn clear_results(&mut self) {
        self.report = None;
    }

    /// `(passed, total)` of the last run.
    pub fn summary(&self) -> Option<(usize, usize)> {
        self.report.as_ref().map(|r| (r.passed(), r.total()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::heuristic::HeuristicBackend;

    #[test]
    fn test_new_session_loads_starter() {
        let session = JudgeSession::new().unwrap();
        assert_eq!(session.problem().id, "two-sum");
        assert_eq!(session.language(), Language::Python);
        assert!(session.code().contains("def twoSum"));
        assert!(session.report().is_none());
    }

    #[test]
    fn test_changes_clear_results() {
        let mut session = JudgeSession::new().unwrap();
        session.set_code("seen = dict()".to_string());
        session.run(&mut HeuristicBackend::seeded(3));
        assert_eq!(session.summary(), Some((5, 5)));

        session.set_language(Language::Cpp);
        assert!(session.report().is_none());
        assert!(session.code().contains("vector<int> twoSum"));

        session.set_code("for".to_string());
        session.run(&mut HeuristicBackend::seeded(3));
        session.select_problem("binary-search").unwrap();
        assert!(session.report().is_none());
        assert!(session.code().contains("int search"));
        assert!(session.select_problem("nope").is_err());
        assert_eq!(session.problem().id, "binary-search");
    }

    #[test]
    fn test_stale_reports_rejected() {
        let mut session = JudgeSession::new().unwrap();
        let report = HeuristicBackend::seeded(0).judge(&session.submission());
        session.set_language(Language::Java);
        assert!(!session.accept_report(report));
        let report = HeuristicBackend::seeded(0).judge(&session.submission());
        assert!(session.accept_report(report));
        assert!(session.summary().is_some());
    }
}
