//! Durations used by the visualizers.

use std::time::Duration;

const fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Array access: 500 ms up plus 500 ms down.
pub const ACCESS_LIFT: Duration = ms(1000);
pub const ACCESS_HOLD: Duration = ms(1000);

pub const LIST_BOUNCE: Duration = ms(800);
pub const LIST_HOLD: Duration = ms(500);

pub const TREE_SEARCH_PULSE: Duration = ms(800);
pub const TREE_SEARCH_HOLD: Duration = ms(500);
pub const TREE_INSERT_PULSE: Duration = ms(600);

pub const HEAP_SWAP: Duration = ms(1000);
pub const HEAP_SWAP_HOLD: Duration = ms(100);

pub const LINEAR_PROBE: Duration = ms(600);
pub const LINEAR_HOLD: Duration = ms(300);
pub const BINARY_PROBE: Duration = ms(800);
pub const BINARY_HOLD: Duration = ms(500);

pub const TRAVERSAL_PULSE: Duration = ms(1000);
pub const TRAVERSAL_HOLD: Duration = ms(500);

pub const BTREE_HIGHLIGHT: Duration = ms(500);

/// Simulated compile/run delay before judge results appear.
pub const JUDGE_DELAY: Duration = ms(1500);
