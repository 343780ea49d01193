//! Reference text shown next to each visualizer.

use serde::{Deserialize, Serialize};

/// The seven structure/algorithm visualizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Array,
    LinkedList,
    BinaryTree,
    Heap,
    BTree,
    Search,
    Traversal,
}

#[derive(Debug, Clone, Copy)]
pub struct TopicInfo {
    pub title: &'static str,
    pub summary: &'static str,
    pub characteristics: &'static [&'static str],
    /// Two groups of practice questions with their headings.
    pub questions: [(&'static str, &'static [&'static str]); 2],
}

impl Topic {
    pub const ALL: [Topic; 7] = [
        Topic::Array,
        Topic::LinkedList,
        Topic::BinaryTree,
        Topic::Heap,
        Topic::BTree,
        Topic::Search,
        Topic::Traversal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::Array => "Array",
            Topic::LinkedList => "Linked List",
            Topic::BinaryTree => "Binary Tree",
            Topic::Heap => "Heap",
            Topic::BTree => "B-Tree",
            Topic::Search => "Search",
            Topic::Traversal => "Traversal",
        }
    }

    pub fn info(self) -> TopicInfo {
        match self {
            Topic::Array => TopicInfo {
                title: "Array Data Structure",
                summary: "Arrays store elements in contiguous memory locations, allowing direct access via indices.",
                characteristics: &[
                    "Elements are stored in contiguous memory locations",
                    "Direct access to any element using index: O(1)",
                    "Fixed size in most implementations",
                    "Cache-friendly due to memory locality",
                ],
                questions: [
                    ("Easy", &["Two Sum", "Remove Duplicates from Sorted Array", "Maximum Subarray (Kadane's Algorithm)", "Merge Sorted Array"]),
                    ("Medium", &["3Sum", "Container With Most Water", "Product of Array Except Self", "Rotate Array"]),
                ],
            },
            Topic::LinkedList => TopicInfo {
                title: "Linked List Data Structure",
                summary: "Linked lists store elements in nodes, where each node contains data and a pointer to the next node.",
                characteristics: &[
                    "Elements (nodes) are stored anywhere in memory",
                    "Each node contains data and a pointer to the next node",
                    "Sequential access only: O(n) to reach any element",
                    "Dynamic size - can grow/shrink during runtime",
                    "O(1) insertion/deletion at the beginning",
                ],
                questions: [
                    ("Easy", &["Reverse Linked List", "Merge Two Sorted Lists", "Remove Duplicates from Sorted List", "Linked List Cycle"]),
                    ("Medium", &["Add Two Numbers", "Remove Nth Node From End", "Linked List Cycle II", "Intersection of Two Linked Lists"]),
                ],
            },
            Topic::BinaryTree => TopicInfo {
                title: "Binary Tree Data Structure",
                summary: "Binary trees are hierarchical structures where each node has at most two children.",
                characteristics: &[
                    "Each node has at most two children (left and right)",
                    "Binary Search Tree: left child < parent < right child",
                    "Search, insertion, deletion: O(log n) average, O(n) worst case",
                    "Used in databases, expression parsing, and decision trees",
                ],
                questions: [
                    ("Easy", &["Maximum Depth of Binary Tree", "Same Tree", "Invert Binary Tree", "Symmetric Tree"]),
                    ("Medium", &["Binary Tree Level Order Traversal", "Validate Binary Search Tree", "Lowest Common Ancestor", "Binary Tree Right Side View"]),
                ],
            },
            Topic::Heap => TopicInfo {
                title: "Heap Data Structure",
                summary: "Heaps are complete binary trees that satisfy the heap property for priority operations.",
                characteristics: &[
                    "Complete binary tree stored as an array",
                    "Max Heap: parent ≥ children, Min Heap: parent ≤ children",
                    "Insert: O(log n), Extract root: O(log n)",
                    "Used in priority queues, heap sort, and graph algorithms",
                    "Array indices: parent = (i-1)/2, children = 2i+1, 2i+2",
                ],
                questions: [
                    ("Easy", &["Kth Largest Element in Array", "Last Stone Weight", "Find Median from Data Stream", "Top K Frequent Elements"]),
                    ("Medium", &["Merge k Sorted Lists", "Task Scheduler", "Ugly Number II", "Meeting Rooms II"]),
                ],
            },
            Topic::BTree => TopicInfo {
                title: "B-Tree Data Structure",
                summary: "B-Trees are self-balancing trees optimized for systems that read/write large blocks of data.",
                characteristics: &[
                    "Self-balancing tree optimized for disk I/O operations",
                    "Each node can contain multiple keys (up to 2t-1)",
                    "All leaves are at the same level",
                    "Search, insertion, deletion: O(log n)",
                    "Used in databases and file systems",
                    "Minimizes disk reads by storing multiple keys per node",
                ],
                questions: [
                    ("Concepts", &["Node splitting on overflow", "Minimum degree t", "Disk page sizing"]),
                    ("Related", &["B+ Trees", "2-3-4 Trees", "LSM Trees"]),
                ],
            },
            Topic::Search => TopicInfo {
                title: "Search Algorithms",
                summary: "Visualize different search algorithms and their performance characteristics.",
                characteristics: &[
                    "Linear: O(n) time, O(1) space, works on unsorted arrays",
                    "Linear: checks each element sequentially; best case O(1)",
                    "Binary: O(log n) time, O(1) space, requires a sorted array",
                    "Binary: divides the search space in half each step",
                ],
                questions: [
                    ("Binary Search", &["Search Insert Position", "Find First and Last Position", "Search in Rotated Sorted Array", "Find Peak Element"]),
                    ("Advanced Search", &["Search a 2D Matrix", "Find Minimum in Rotated Array", "Median of Two Sorted Arrays", "Kth Smallest Element in BST"]),
                ],
            },
            Topic::Traversal => TopicInfo {
                title: "Tree Traversal Algorithms",
                summary: "Explore different tree traversal methods: In-order, Pre-order, Post-order, and Level-order.",
                characteristics: &[
                    "In-order: expression evaluation, BST validation",
                    "Pre-order: tree serialization, prefix expressions",
                    "Post-order: directory size calculation, postfix expressions",
                    "Level-order: tree printing, shortest path in unweighted trees",
                ],
                questions: [
                    ("Easy", &["Binary Tree Inorder Traversal", "Binary Tree Preorder Traversal", "Binary Tree Postorder Traversal"]),
                    ("Medium", &["Binary Tree Level Order Traversal", "Zigzag Level Order Traversal", "Construct Tree from Preorder and Inorder"]),
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_content() {
        for topic in Topic::ALL {
            let info = topic.info();
            assert!(!info.title.is_empty(), "{topic:?}");
            assert!(!info.characteristics.is_empty(), "{topic:?}");
            assert!(info.questions.iter().all(|(_, q)| !q.is_empty()));
        }
    }
}
