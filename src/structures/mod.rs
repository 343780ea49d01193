//! Pure data-structure models behind each visualizer tab.
//!
//! Nothing in here knows about rendering or animation; operations return
//! enough information (paths, swap traces, probes) for the scene and
//! sequencer layers to narrate them.

pub mod array;
pub mod linked_list;
pub mod bst;
pub mod heap;
pub mod btree;
pub mod search;

pub use array::ArrayModel;
pub use linked_list::LinkedList;
pub use bst::{BinarySearchTree, TraversalOrder};
pub use heap::{Heap, HeapKind, HeapTrace};
pub use btree::BTreeDemo;
pub use search::{SearchAlgorithm, SearchOutcome, linear_search, binary_search};
