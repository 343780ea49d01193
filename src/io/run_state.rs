//! Shared flag for a judge run happening off the GUI thread.

/// Only the in-progress flag is shared; reports come through a channel.
/// Wrapped in an `Arc<Mutex<>>` between the GUI and the worker thread.
#[derive(Debug, Default)]
pub struct RunState {
    pub in_progress: bool,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }
}
