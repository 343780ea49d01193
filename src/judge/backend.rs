//! The execution backend seam.
//!
//! A backend checks a submission, runs it against single test cases, and the
//! provided [`ExecutionBackend::judge`] folds that into a report and verdict.
//! The shipped backend is the keyword heuristic in [`super::heuristic`]; a
//! real sandboxed runner would implement the same trait.

use serde::Serialize;
use tracing::info;

use super::catalog::{Language, Problem, TestCase};

/// Code submitted for one problem.
#[derive(Debug, Clone)]
pub struct Submission {
    pub problem: &'static Problem,
    pub language: Language,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Output of the compile-or-check phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    pub fn push(&mut self, severity: Severity, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity,
            message: message.into(),
        });
    }

    /// True unless an error-level diagnostic was reported.
    pub fn is_ok(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub passed: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Accepted,
    WrongAnswer { failed: usize },
    /// The check phase reported errors; no case was run.
    CompileError,
    NoTestCases,
}

impl Verdict {
    pub fn label(&self) -> String {
        match self {
            Verdict::Accepted => "Accepted".to_string(),
            Verdict::WrongAnswer { failed } => format!("Wrong Answer ({failed} failed)"),
            Verdict::CompileError => "Compile Error".to_string(),
            Verdict::NoTestCases => "No Test Cases".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JudgeReport {
    pub problem_id: String,
    pub language: Language,
    pub backend: String,
    pub check: CheckReport,
    pub cases: Vec<CaseResult>,
    pub verdict: Verdict,
}

impl JudgeReport {
    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|c| c.passed).count()
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    /// `passed/total`, e.g. `4/5`.
    pub fn summary(&self) -> String {
        format!("{}/{}", self.passed(), self.total())
    }

    pub fn visible(&self) -> impl Iterator<Item = &CaseResult> {
        self.cases.iter().filter(|c| !c.hidden)
    }

    pub fn hidden(&self) -> impl Iterator<Item = &CaseResult> {
        self.cases.iter().filter(|c| c.hidden)
    }
}

pub trait ExecutionBackend: Send {
    fn name(&self) -> &str;

    /// Compile-or-check phase.
    fn check(&mut self, submission: &Submission) -> CheckReport;

    /// Runs the submission against one case.
    fn run_case(&mut self, submission: &Submission, case: &TestCase) -> CaseResult;

    /// Checks, runs every case in catalog order and computes the verdict.
    fn judge(&mut self, submission: &Submission) -> JudgeReport {
        let check = self.check(submission);
        let problem = submission.problem;

        let (cases, verdict) = if !check.is_ok() {
            (Vec::new(), Verdict::CompileError)
        } else if problem.test_cases.is_empty() {
            (Vec::new(), Verdict::NoTestCases)
        } else {
            let cases: Vec<CaseResult> = problem
                .test_cases
                .iter()
                .map(|case| self.run_case(submission, case))
                .collect();
            let failed = cases.iter().filter(|c| !c.passed).count();
            let verdict = if failed == 0 {
                Verdict::Accepted
            } else {
                Verdict::WrongAnswer { failed }
            };
            (cases, verdict)
        };

        let report = JudgeReport {
            problem_id: problem.id.clone(),
            language: submission.language,
            backend: self.name().to_string(),
            check,
            cases,
            verdict,
        };
        info!(
            problem = %report.problem_id,
            language = report.language.key(),
            result = %report.summary(),
            verdict = %report.verdict.label(),
            "judge finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::catalog;

    /// Echoes the expected output for every case whose input is short.
    struct ShortInputsOnly;

    impl ExecutionBackend for ShortInputsOnly {
        fn name(&self) -> &str {
            "short-inputs"
        }

        fn check(&mut self, submission: &Submission) -> CheckReport {
            let mut report = CheckReport::default();
            if submission.code.is_empty() {
                report.push(Severity::Error, "nothing to compile");
            }
            report
        }

        fn run_case(&mut self, _submission: &Submission, case: &TestCase) -> CaseResult {
            let passed = case.input.len() < 10;
            CaseResult {
                input: case.input.clone(),
                expected: case.expected_output.clone(),
                actual: if passed {
                    case.expected_output.clone()
                } else {
                    "Wrong Answer".to_string()
                },
                passed,
                hidden: case.hidden,
            }
        }
    }

    fn submission(code: &str) -> Submission {
        Submission {
            problem: catalog::find("reverse-linked-list").unwrap(),
            language: Language::Java,
            code: code.to_string(),
        }
    }

    #[test]
    fn test_judge_counts_failures() {
        let report = ShortInputsOnly.judge(&submission("class Solution {}"));
        // "[1,2,3,4,5]" is the only input of ten or more characters.
        assert_eq!(report.summary(), "3/4");
        assert_eq!(report.verdict, Verdict::WrongAnswer { failed: 1 });
        assert_eq!(report.hidden().count(), 1);
        assert_eq!(report.visible().count(), 3);
        assert_eq!(report.backend, "short-inputs");
    }

    #[test]
    fn test_check_errors_skip_cases() {
        let report = ShortInputsOnly.judge(&submission(""));
        assert_eq!(report.verdict, Verdict::CompileError);
        assert!(report.cases.is_empty());
        assert!(!report.check.is_ok());
    }
}
