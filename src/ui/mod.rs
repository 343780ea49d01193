//! UI panel rendering subsystem
//!
//! - Header (tabs, speed, theme) and status bar
//! - One panel per visualizer tab, sharing the helpers in `controls`
//! - Problems and Compare tabs
//! - Facts side panel
//! - Panel manager (layout and interaction collection)

pub mod header;
pub mod status_bar;
pub mod controls;
pub mod array_panel;
pub mod list_panel;
pub mod tree_panel;
pub mod heap_panel;
pub mod btree_panel;
pub mod search_panel;
pub mod traversal_panel;
pub mod problem_panel;
pub mod compare_panel;
pub mod facts_panel;
pub mod panel_manager;
