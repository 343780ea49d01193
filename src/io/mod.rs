//! I/O modules: background judge runs and solution files.

pub mod run_state;
pub mod async_judge;
pub mod solution_loader;

pub use run_state::RunState;
pub use async_judge::{AsyncJudge, JudgeResult};
pub use solution_loader::read_solution;
