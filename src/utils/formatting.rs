//! Text formatting helpers for the visualizer.

use std::time::{Duration, Instant};

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System};

/// Formats a sequence the way the panels show it: `[10, 25, 30]`.
pub fn format_values(values: &[i64]) -> String {
    let body = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}

/// Gets the current process memory usage in megabytes.
///
/// Returns 0.0 if the process information cannot be retrieved.
pub fn get_current_memory_mb() -> f64 {
    let mut sys = System::new_with_specifics(
        RefreshKind::new().with_processes(ProcessRefreshKind::new().with_memory()),
    );
    sys.refresh_processes_specifics(ProcessRefreshKind::new().with_memory());

    if let Some(process) = sys.process(Pid::from_u32(std::process::id())) {
        process.memory() as f64 / (1024.0 * 1024.0)
    } else {
        0.0
    }
}

/// Formats memory usage in MB as a human-readable string.
pub fn format_memory_mb(memory_mb: f64) -> String {
    if memory_mb > 1024.0 {
        format!("Memory: {:.2} GB", memory_mb / 1024.0)
    } else {
        format!("Memory: {:.1} MB", memory_mb)
    }
}

/// Memory reading refreshed at most once per interval.
///
/// Animations repaint every frame; querying the process table that often
/// is wasted work.
#[derive(Debug)]
pub struct MemoryGauge {
    interval: Duration,
    last: Option<(Instant, f64)>,
}

impl Default for MemoryGauge {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl MemoryGauge {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn read_mb(&mut self) -> f64 {
        let now = Instant::now();
        match self.last {
            Some((at, value)) if now.duration_since(at) < self.interval => value,
            _ => {
                let value = get_current_memory_mb();
                self.last = Some((now, value));
                value
            }
        }
    }
}
