//! Linear and binary search, instrumented to count comparisons.

/// Sorted sequence used by the search widget.
pub const SEARCH_SEED: [i64; 9] = [10, 23, 35, 47, 52, 68, 74, 81, 95];

/// Which search the widget runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default)]
pub enum SearchAlgorithm {
    #[default]
    Linear,
    Binary,
}

impl SearchAlgorithm {
    pub fn label(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::Binary => "Binary Search",
        }
    }

    pub fn complexity(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "O(n)",
            SearchAlgorithm::Binary => "O(log n)",
        }
    }
}

/// One comparison made by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Index compared against the target.
    pub index: usize,
    /// Inclusive bounds of the live range at the time (binary search only;
    /// linear search reports `index..=len-1`).
    pub low: usize,
    pub high: usize,
    pub matched: bool,
}

/// What a search found and how much work it did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub index: Option<usize>,
    pub comparisons: usize,
    pub probes: Vec<Probe>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    /// Index of the match, or -1 when absent.
    pub fn signed_index(&self) -> i64 {
        self.index.map_or(-1, |i| i as i64)
    }
}

/// Scans element by element until `target` is found.
pub fn linear_search(values: &[i64], target: i64) -> SearchOutcome {
    let mut probes = Vec::new();
    let high = values.len().saturating_sub(1);
    for (index, &value) in values.iter().enumerate() {
        let matched = value == target;
        probes.push(Probe {
            index,
            low: index,
            high,
            matched,
        });
        if matched {
            return SearchOutcome {
                index: Some(index),
                comparisons: probes.len(),
                probes,
            };
        }
    }
    SearchOutcome {
        index: None,
        comparisons: probes.len(),
        probes,
    }
}

/// Halves the live range of a sorted slice until `target` is found or the
/// range is empty.
pub fn binary_search(values: &[i64], target: i64) -> SearchOutcome {
    let mut probes = Vec::new();
    let mut low = 0usize;
    let mut high = values.len();

    // `high` is exclusive internally; probes report it inclusive.
    while low < high {
        let mid = low + (high - low - 1) / 2;
        let matched = values[mid] == target;
        probes.push(Probe {
            index: mid,
            low,
            high: high - 1,
            matched,
        });
        if matched {
            return SearchOutcome {
                index: Some(mid),
                comparisons: probes.len(),
                probes,
            };
        }
        if values[mid] < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    SearchOutcome {
        index: None,
        comparisons: probes.len(),
        probes,
    }
}

/// Upper bound on binary search comparisons: `ceil(log2(n)) + 1`.
pub fn binary_search_bound(len: usize) -> usize {
    if len <= 1 {
        return 1;
    }
    (usize::BITS - (len - 1).leading_zeros()) as usize + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    #[test]
    fn test_linear_counts_every_probe() {
        let outcome = linear_search(&SEARCH_SEED, 52);
        assert_eq!(outcome.index, Some(4));
        assert_eq!(outcome.comparisons, 5);

        let miss = linear_search(&SEARCH_SEED, 53);
        assert_eq!(miss.signed_index(), -1);
        assert_eq!(miss.comparisons, SEARCH_SEED.len());
    }

    #[test]
    fn test_binary_matches_floor_midpoint() {
        // (0 + 8) / 2 = 4 -> 52, then (5 + 8) / 2 = 6 -> 74
        let outcome = binary_search(&SEARCH_SEED, 74);
        let mids: Vec<usize> = outcome.probes.iter().map(|p| p.index).collect();
        assert_eq!(mids, vec![4, 6]);
        assert_eq!(outcome.index, Some(6));
        assert_eq!(outcome.probes[1].low, 5);
        assert_eq!(outcome.probes[1].high, 8);
    }

    #[test]
    fn test_binary_empty_slice() {
        let outcome = binary_search(&[], 3);
        assert_eq!(outcome.signed_index(), -1);
        assert_eq!(outcome.comparisons, 0);
    }

    #[test]
    fn test_binary_bound() {
        assert_eq!(binary_search_bound(1), 1);
        assert_eq!(binary_search_bound(2), 2);
        assert_eq!(binary_search_bound(9), 5);
        assert_eq!(binary_search_bound(16), 5);
        assert_eq!(binary_search_bound(17), 6);
    }

    #[test]
    fn test_binary_search_random_sorted_sets() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let len = rng.gen_range(1..64);
            let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(-500..500)).collect();
            values.sort_unstable();
            values.dedup();
            for target in -510..510 {
                let outcome = binary_search(&values, target);
                match values.iter().position(|&v| v == target) {
                    Some(i) => assert_eq!(outcome.index, Some(i)),
                    None => assert_eq!(outcome.signed_index(), -1),
                }
                assert!(outcome.comparisons <= binary_search_bound(values.len()));
            }
        }
    }
}
