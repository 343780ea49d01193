//! Array-backed binary heap with a runtime max/min toggle.
//!
//! Insert and extract return a [`HeapTrace`]: the staging array before
//! repair plus the swaps performed, which is what the animation replays.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VizError};

/// Values shown when the heap widget first opens (a valid max-heap).
pub const HEAP_SEED: [i64; 7] = [90, 80, 70, 60, 50, 40, 30];

/// Ordering the heap maintains between a parent and its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HeapKind {
    #[default]
    Max,
    Min,
}

impl HeapKind {
    /// True when `child` must move above `parent`.
    fn outranks(self, child: i64, parent: i64) -> bool {
        match self {
            HeapKind::Max => child > parent,
            HeapKind::Min => child < parent,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            HeapKind::Max => HeapKind::Min,
            HeapKind::Min => HeapKind::Max,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeapKind::Max => "Max Heap",
            HeapKind::Min => "Min Heap",
        }
    }
}

/// Swaps performed while repairing the heap, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeapTrace {
    /// The array right after the structural change (push, or last moved to
    /// root) and before any swap.
    pub staging: Vec<i64>,
    /// Index pairs swapped, child/parent order as encountered.
    pub swaps: Vec<(usize, usize)>,
}

/// Binary heap over a `Vec<i64>` using children `2i+1` and `2i+2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heap {
    data: Vec<i64>,
    kind: HeapKind,
}

impl Default for Heap {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Heap {
    pub fn new(kind: HeapKind) -> Self {
        Self {
            data: Vec::new(),
            kind,
        }
    }

    pub fn seeded() -> Self {
        Self {
            data: HEAP_SEED.to_vec(),
            kind: HeapKind::Max,
        }
    }

    pub fn kind(&self) -> HeapKind {
        self.kind
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn peek(&self) -> Option<i64> {
        self.data.first().copied()
    }

    pub fn parent_index(index: usize) -> Option<usize> {
        (index > 0).then(|| (index - 1) / 2)
    }

    /// Pushes `value` and sifts it up.
    pub fn insert(&mut self, value: i64) -> HeapTrace {
        self.data.push(value);
        let mut trace = HeapTrace {
            staging: self.data.clone(),
            swaps: Vec::new(),
        };
        self.sift_up(self.data.len() - 1, &mut trace.swaps);
        trace
    }

    /// Moves the last element into the root slot, then sifts it down.
    pub fn extract_root(&mut self) -> Result<(i64, HeapTrace)> {
        let last = self.data.pop().ok_or(VizError::Empty)?;
        if self.data.is_empty() {
            return Ok((last, HeapTrace::default()));
        }

        let root = std::mem::replace(&mut self.data[0], last);
        let mut trace = HeapTrace {
            staging: self.data.clone(),
            swaps: Vec::new(),
        };
        self.sift_down(0, &mut trace.swaps);
        Ok((root, trace))
    }

    fn sift_up(&mut self, mut index: usize, swaps: &mut Vec<(usize, usize)>) {
        while let Some(parent) = Self::parent_index(index) {
            if !self.kind.outranks(self.data[index], self.data[parent]) {
                break;
            }
            self.data.swap(index, parent);
            swaps.push((index, parent));
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize, swaps: &mut Vec<(usize, usize)>) {
        let len = self.data.len();
        loop {
            let mut target = index;
            for child in [2 * index + 1, 2 * index + 2] {
                if child < len && self.kind.outranks(self.data[child], self.data[target]) {
                    target = child;
                }
            }
            if target == index {
                break;
            }
            self.data.swap(index, target);
            swaps.push((index, target));
            index = target;
        }
    }

    /// Switches ordering by re-sorting the whole backing sequence.
    ///
    /// A fully sorted array is trivially a heap of the matching kind; this
    /// is not an incremental re-heapify.
    pub fn set_kind(&mut self, kind: HeapKind) {
        self.kind = kind;
        match kind {
            HeapKind::Max => self.data.sort_unstable_by(|a, b| b.cmp(a)),
            HeapKind::Min => self.data.sort_unstable(),
        }
    }

    pub fn toggle_kind(&mut self) -> HeapKind {
        self.set_kind(self.kind.flipped());
        self.kind
    }

    /// Checks the heap property at every index.
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            !self.kind.outranks(self.data[i], self.data[parent])
        })
    }
}
