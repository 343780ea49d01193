//! Simulated coding-problem judge.
//!
//! The catalog is static data. Evaluation goes through the
//! [`ExecutionBackend`] trait; the only backend shipped is
//! [`HeuristicBackend`], which matches keywords and never runs code.

pub mod backend;
pub mod catalog;
pub mod heuristic;
pub mod session;

pub use backend::{
    CaseResult, CheckReport, Diagnostic, ExecutionBackend, JudgeReport, Severity, Submission,
    Verdict,
};
pub use catalog::{Difficulty, Example, Language, Problem, StarterCode, TestCase};
pub use heuristic::HeuristicBackend;
pub use session::JudgeSession;
