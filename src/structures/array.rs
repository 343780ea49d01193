//! Array widget model: append, access-by-index and remove-last.

use crate::error::{Result, VizError};

/// Values shown when the array widget first opens.
pub const ARRAY_SEED: [i64; 5] = [10, 25, 30, 45, 50];

/// A growable sequence of numbers.
///
/// There is deliberately no insert-at-index; the widget only appends,
/// removes the last element, and highlights an element on access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayModel {
    values: Vec<i64>,
}

impl Default for ArrayModel {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ArrayModel {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates the array with the widget's seed values.
    pub fn seeded() -> Self {
        Self::from_values(ARRAY_SEED.to_vec())
    }

    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Appends a value and returns the index it landed on.
    pub fn push(&mut self, value: i64) -> usize {
        self.values.push(value);
        self.values.len() - 1
    }

    /// Reads the value at `index`.
    ///
    /// Access never mutates; it exists so the widget can validate the
    /// index before building a highlight sequence.
    pub fn access(&self, index: usize) -> Result<i64> {
        self.values
            .get(index)
            .copied()
            .ok_or(VizError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Removes and returns the last value.
    pub fn pop(&mut self) -> Result<i64> {
        self.values.pop().ok_or(VizError::Empty)
    }
}
