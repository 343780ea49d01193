//! Data Structure Visualizer GUI Application
//!
//! Interactive visualizer for classic data structures built with egui:
//! - Animated arrays, linked lists, BSTs, heaps, B-trees, searches and traversals
//! - Complexity facts and practice questions per structure
//! - A practice judge with simulated test runs on a background thread
//! - Multiple themes and persistent preferences

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators
//! - `state/` - One state component per tab plus theme and layout
//! - `presentation/` - Colour choices derived from the palette
//! - `io/` - Background judge runs and solution file loading
//! - `utils/` - Formatting and memory usage helpers
//! - `ui/` - Panel rendering and interaction collection
//! - `rendering/` - Scene painting

use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod utils;
mod presentation;
mod io;
mod app;
mod rendering;
mod ui;
mod state;

use app::{AppState, ApplicationCoordinator, Preferences, SettingsCoordinator, ThemeCoordinator};
use io::AsyncJudge;
use state::ThemeState;
use ui::panel_manager::PanelManager;
use utils::MemoryGauge;

/// Application entry point.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("starting data structure visualizer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 560.0])
            .with_title("Data Structure Visualizer"),
        ..Default::default()
    };

    eframe::run_native(
        "Data Structure Visualizer",
        options,
        Box::new(|cc| Ok(Box::new(DsvizApp::new(cc)))),
    )
}

/// The visualizer application.
///
/// Work is delegated to coordinators:
/// - `ApplicationCoordinator` handles interactions, animation time and judge results
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` handles UI panel layout and rendering
struct DsvizApp {
    /// Centralized application state
    state: AppState,
    /// Background judge runner
    judge: AsyncJudge,
    memory: MemoryGauge,
}

impl Default for DsvizApp {
    fn default() -> Self {
        Self {
            state: AppState::new(),
            judge: AsyncJudge::new(),
            memory: MemoryGauge::default(),
        }
    }
}

impl DsvizApp {
    /// Creates the app with theme and preferences loaded from persistent storage.
    fn new(cc: &eframe::CreationContext) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let preferences = SettingsCoordinator::load_preferences(cc.storage);

        Self {
            state: AppState::with_settings(
                ThemeState::with_theme(theme_name),
                preferences.layout(),
                preferences.judge_language,
            ),
            judge: AsyncJudge::new(),
            memory: MemoryGauge::default(),
        }
    }

    fn preferences(&self) -> Preferences {
        Preferences {
            active_tab: self.state.layout.active_tab(),
            animation_speed: self.state.layout.animation_speed(),
            judge_language: self.state.problems.language(),
        }
    }
}

impl eframe::App for DsvizApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_preferences(storage, &self.preferences());
    }

    /// Main update loop:
    /// 1. Apply theme
    /// 2. Collect a finished judge run
    /// 3. Advance animations
    /// 4. Render all panels via PanelManager
    /// 5. Handle panel interactions
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if ApplicationCoordinator::check_judge_completion(&mut self.state, &mut self.judge) {
            ctx.request_repaint();
        }

        ApplicationCoordinator::advance_animations(&mut self.state, ctx);

        if let Some(interaction) =
            PanelManager::render_all_panels(ctx, &mut self.state, &mut self.memory)
        {
            ApplicationCoordinator::handle_interaction(
                &mut self.state,
                &mut self.judge,
                interaction,
                ctx,
            );
        }

        if self.judge.is_running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
