pub mod error;
pub mod structures;
pub mod traversal;
pub mod animation;
pub mod scene;
pub mod judge;
pub mod comparison;
pub mod facts;
pub mod theme;

// Errors
pub use error::{Result, VizError, parse_index, parse_value};

// Structure models
pub use structures::{
    ArrayModel, LinkedList, BinarySearchTree, TraversalOrder,
    Heap, HeapKind, HeapTrace, BTreeDemo,
    SearchAlgorithm, SearchOutcome, linear_search, binary_search,
};
pub use traversal::TraversalModel;

// Animation engine
pub use animation::{ElementStyle, Motion, SequenceEvent, Sequencer, SequencerState, Settle, Step};

// Scene description
pub use scene::{Edge, EdgeStyle, ElementId, Scene, SceneElement, Shape};

// Judge
pub use judge::{
    ExecutionBackend, HeuristicBackend, JudgeReport, JudgeSession,
    Language, Problem, Verdict,
};

pub use facts::Topic;

// Theme support
pub use theme::{Theme, ThemeManager, UiColors, VizPalette, hex_to_color32, lerp_color, with_alpha};
