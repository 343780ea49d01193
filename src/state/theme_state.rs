//! Theme and styling state management.
//!
//! Holds the theme manager and the currently selected theme, and hands
//! out the visualizer palette the canvases paint with.

use rdsviz::theme::DEFAULT_THEME;
use rdsviz::{ThemeManager, VizPalette};

/// State related to visual theme and styling.
pub struct ThemeState {
    theme_manager: ThemeManager,
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    pub fn new() -> Self {
        Self::with_theme(DEFAULT_THEME.to_string())
    }

    /// Creates the state with a specific theme; unknown names fall back to
    /// the default.
    pub fn with_theme(theme_name: String) -> Self {
        let mut theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.set_current_theme(&theme_name) {
            theme_name
        } else {
            DEFAULT_THEME.to_string()
        };
        Self {
            theme_manager,
            current_theme_name,
        }
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Palette of the active theme.
    pub fn palette(&self) -> &VizPalette {
        &self.theme_manager.current_theme().palette
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name. Unknown names are ignored.
    pub fn set_theme(&mut self, theme_name: String) {
        if self.theme_manager.set_current_theme(&theme_name) {
            self.current_theme_name = theme_name;
        }
    }
}
