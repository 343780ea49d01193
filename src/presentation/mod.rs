//! Presentation layer: colour choices kept out of the panels.

pub mod color_mapping;
