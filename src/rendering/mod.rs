//! Rendering subsystem: scene painting and label measurement.

pub mod scene_renderer;
pub mod text_utils;
