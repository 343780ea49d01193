//! Keyword-matching placeholder backend.
//!
//! Nothing is compiled or executed. Each problem has a substring rule; a
//! submission that satisfies it passes every case. Anything else passes
//! each case independently with probability [`DEFAULT_PASS_RATE`], failing
//! with the output `"Wrong Answer"`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::backend::{CaseResult, CheckReport, ExecutionBackend, Severity, Submission};
use super::catalog::TestCase;

pub const DEFAULT_PASS_RATE: f64 = 0.7;
pub const WRONG_ANSWER: &str = "Wrong Answer";

pub struct HeuristicBackend {
    rng: StdRng,
    pass_rate: f64,
}

impl Default for HeuristicBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicBackend {
    /// Random outcomes seeded from the OS.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            pass_rate: DEFAULT_PASS_RATE,
        }
    }

    /// Deterministic outcomes for tests and reproducible CLI runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            pass_rate: DEFAULT_PASS_RATE,
        }
    }

    pub fn with_pass_rate(mut self, rate: f64) -> Self {
        self.pass_rate = rate.clamp(0.0, 1.0);
        self
    }
}

/// Whether `code` satisfies the keyword rule for `problem_id`.
pub fn matches_rule(problem_id: &str, code: &str) -> bool {
    let has = |needle: &str| code.contains(needle);
    match problem_id {
        "two-sum" => has("HashMap") || has("dict") || has("unordered_map") || has("for"),
        "binary-search" => has("while") && (has("left") || has("low")) && (has("right") || has("high")),
        "reverse-linked-list" => (has("prev") && has("current")) || has("next"),
        "maximum-depth-binary-tree" => has("max") && (has("recursive") || (has("left") && has("right"))),
        _ => false,
    }
}

impl ExecutionBackend for HeuristicBackend {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn check(&mut self, submission: &Submission) -> CheckReport {
        let mut report = CheckReport::default();
        let code = submission.code.trim();
        if code.is_empty() {
            report.push(Severity::Warning, "submission is empty");
        } else if code == submission.problem.starter(submission.language).trim() {
            report.push(Severity::Info, "starter code is unchanged");
        }
        if !matches_rule(&submission.problem.id, &submission.code) {
            report.push(
                Severity::Info,
                "no recognised approach; results are simulated",
            );
        }
        report
    }

    fn run_case(&mut self, submission: &Submission, case: &TestCase) -> CaseResult {
        let passed = if matches_rule(&submission.problem.id, &submission.code) {
            true
        } else {
            self.rng.gen_bool(self.pass_rate)
        };
        debug!(problem = %submission.problem.id, input = %case.input, passed, "case simulated");

        CaseResult {
            input: case.input.clone(),
            expected: case.expected_output.clone(),
            actual: if passed {
                case.expected_output.clone()
            } else {
                WRONG_ANSWER.to_string()
            },
            passed,
            hidden: case.hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::judge::backend::Verdict;
    use crate::judge::catalog::{self, Language};

    fn submit(problem: &str, code: &str) -> Submission {
        Submission {
            problem: catalog::find(problem).unwrap(),
            language: Language::Python,
            code: code.to_string(),
        }
    }

    #[test]
    fn test_keyword_rules() {
        assert!(matches_rule("two-sum", "seen = dict()"));
        assert!(matches_rule("two-sum", "for i in range(n):"));
        assert!(matches_rule("binary-search", "while low <= high:"));
        assert!(!matches_rule("binary-search", "while lo < hi:"));
        assert!(matches_rule("reverse-linked-list", "prev, current = None, head"));
        assert!(matches_rule("reverse-linked-list", "node.next"));
        assert!(matches_rule(
            "maximum-depth-binary-tree",
            "return 1 + max(depth(root.left), depth(root.right))"
        ));
        assert!(!matches_rule("maximum-depth-binary-tree", "return max(a, b)"));
        assert!(!matches_rule("unknown", "for while"));
    }

    #[test]
    fn test_rule_match_passes_every_case() {
        let mut backend = HeuristicBackend::seeded(1).with_pass_rate(0.0);
        let code = "def search(nums, target):\n    left, right = 0, len(nums) - 1\n    while left <= right:\n        pass";
        let report = backend.judge(&submit("binary-search", code));
        assert_eq!(report.verdict, Verdict::Accepted);
        assert_eq!(report.summary(), "4/4");
        assert!(report.cases.iter().all(|c| c.actual == c.expected));
    }

    #[test]
    fn test_unmatched_code_uses_pass_rate() {
        let mut never = HeuristicBackend::seeded(7).with_pass_rate(0.0);
        let report = never.judge(&submit("maximum-depth-binary-tree", "pass"));
        assert_eq!(report.verdict, Verdict::WrongAnswer { failed: 4 });
        assert!(report.cases.iter().all(|c| c.actual == WRONG_ANSWER));

        let mut always = HeuristicBackend::seeded(7).with_pass_rate(1.0);
        let report = always.judge(&submit("maximum-depth-binary-tree", "pass"));
        assert_eq!(report.verdict, Verdict::Accepted);
    }

    #[test]
    fn test_same_seed_same_results() {
        let code = "return 42";
        let a = HeuristicBackend::seeded(99).judge(&submit("two-sum", code));
        let b = HeuristicBackend::seeded(99).judge(&submit("two-sum", code));
        assert_eq!(a, b);
    }

    #[test]
    fn test_check_notes_unchanged_starter() {
        let problem = catalog::find("two-sum").unwrap();
        let submission = Submission {
            problem,
            language: Language::Java,
            code: problem.starter(Language::Java).to_string(),
        };
        let report = HeuristicBackend::seeded(0).check(&submission);
        assert!(report.is_ok());
        assert!(report
            .diagnostics
            .iter()
            .any(|d| d.message.contains("unchanged")));
    }
}
