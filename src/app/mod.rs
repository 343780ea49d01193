//! Application-level modules for the visualizer.
//!
//! This module contains the coordinators and the centralized state.

mod app_state;
mod application_coordinator;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::{Preferences, SettingsCoordinator};
