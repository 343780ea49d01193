//! Generic step animation engine shared by every widget.

pub mod easing;
pub mod recipes;
pub mod sequencer;
pub mod step;
pub mod timing;

pub use sequencer::{SequenceEvent, Sequencer, SequencerState};
pub use step::{ElementStyle, Motion, Settle, Step};
