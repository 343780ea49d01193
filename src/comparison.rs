//! Array versus linked list trade-offs shown on the Compare tab.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Better {
    Array,
    LinkedList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonRow {
    pub aspect: &'static str,
    pub array: &'static str,
    pub linked_list: &'static str,
    pub better: Better,
}

const fn row(
    aspect: &'static str,
    array: &'static str,
    linked_list: &'static str,
    better: Better,
) -> ComparisonRow {
    ComparisonRow {
        aspect,
        array,
        linked_list,
        better,
    }
}

pub const ROWS: [ComparisonRow; 8] = [
    row("Memory Layout", "Contiguous memory locations", "Scattered throughout memory", Better::Array),
    row("Access Time", "O(1) - Direct indexing", "O(n) - Sequential traversal", Better::Array),
    row("Insertion at Beginning", "O(n) - Shift all elements", "O(1) - Update head pointer", Better::LinkedList),
    row("Insertion at End", "O(1) - If space available", "O(n) - Traverse to end", Better::Array),
    row("Deletion at Beginning", "O(n) - Shift all elements", "O(1) - Update head pointer", Better::LinkedList),
    row("Memory Overhead", "Low - Only data storage", "High - Extra pointer storage", Better::Array),
    row("Cache Performance", "Excellent - Spatial locality", "Poor - Random memory access", Better::Array),
    row("Size Flexibility", "Fixed size (in most cases)", "Dynamic size", Better::LinkedList),
];

pub const WHEN_ARRAY: [&str; 5] = [
    "When you need frequent random access to elements",
    "When memory usage is a concern",
    "When cache performance is important",
    "When the size is relatively fixed",
    "Mathematical computations and algorithms",
];

pub const WHEN_LINKED_LIST: [&str; 5] = [
    "When frequent insertion/deletion at the beginning",
    "When the size varies significantly",
    "When you don't know the maximum size",
    "Implementing other data structures (stacks, queues)",
    "When memory is allocated dynamically",
];

pub const TAKEAWAY: &str = "The choice between arrays and linked lists depends on your specific use case. \
Arrays excel at random access and memory efficiency, while linked lists shine in dynamic scenarios with \
frequent insertions and deletions.";

/// Rows won by each side: `(array, linked_list)`.
pub fn tally() -> (usize, usize) {
    let array = ROWS.iter().filter(|r| r.better == Better::Array).count();
    (array, ROWS.len() - array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        assert_eq!(tally(), (5, 3));
        assert_eq!(ROWS[1].aspect, "Access Time");
    }
}
