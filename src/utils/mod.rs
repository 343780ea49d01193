//! Utility modules for the visualizer.

pub mod formatting;

pub use formatting::{MemoryGauge, format_memory_mb, format_values};
