//! Themes for the visualizer.
//!
//! Every theme carries two palettes: UI chrome colours applied to egui
//! visuals, and the structure palette used when painting scenes (one accent
//! per widget plus the shared highlight / visited / eliminated / range
//! colours the animations settle into).
//!
//! ```
//! use rdsviz::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula canvas: {:?}", dracula.palette.canvas);
//! ```

use egui::Color32;

/// Colours for panels, text and widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct UiColors {
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub link: Color32,
}

/// Colours used when painting structures.
#[derive(Debug, Clone, PartialEq)]
pub struct VizPalette {
    pub canvas: Color32,
    pub label: Color32,
    pub edge: Color32,

    // Widget accents
    pub array: Color32,
    pub list: Color32,
    pub tree: Color32,
    pub heap: Color32,
    pub btree: Color32,
    pub search: Color32,
    pub traversal: Color32,

    // Animation states
    pub highlight: Color32,
    pub visited: Color32,
    pub eliminated: Color32,
    pub range: Color32,

    // Difficulty badges
    pub easy: Color32,
    pub medium: Color32,
    pub hard: Color32,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub description: &'static str,
    pub ui: UiColors,
    pub palette: VizPalette,
}

/// Built-in themes with one of them selected.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    themes: Vec<Theme>,
    current: usize,
}

pub const DEFAULT_THEME: &str = "Light";

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            themes: vec![light_theme(), dark_theme(), dracula_theme(), one_dark_pro_theme()],
            current: 0,
        }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// Names in display order.
    pub fn list_themes(&self) -> Vec<&'static str> {
        self.themes.iter().map(|t| t.name).collect()
    }

    pub fn current_theme(&self) -> &Theme {
        &self.themes[self.current]
    }

    /// Selects a theme by name. Unknown names leave the selection as is.
    pub fn set_current_theme(&mut self, name: &str) -> bool {
        match self.themes.iter().position(|t| t.name == name) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    /// Copies the theme's UI colours into egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let ui = &theme.ui;

        visuals.panel_fill = ui.panel_background;
        visuals.window_fill = ui.panel_background;
        visuals.extreme_bg_color = ui.extreme_background;
        visuals.faint_bg_color = ui.hover;
        visuals.override_text_color = Some(ui.text);

        visuals.selection.bg_fill = ui.selection;
        visuals.selection.stroke.color = ui.link;

        visuals.widgets.noninteractive.bg_fill = ui.panel_background;
        visuals.widgets.inactive.bg_fill = ui.hover;
        visuals.widgets.inactive.weak_bg_fill = ui.hover;
        visuals.widgets.hovered.bg_fill = ui.hover;
        visuals.widgets.active.bg_fill = ui.selection;

        visuals.hyperlink_color = ui.link;
        visuals.error_fg_color = ui.error;
        visuals.warn_fg_color = ui.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// The structure palette is the same on every theme; only the canvas and
/// label contrast change.
fn structure_palette(canvas: &str, label: &str, edge: &str) -> VizPalette {
    VizPalette {
        canvas: hex_to_color32(canvas),
        label: hex_to_color32(label),
        edge: hex_to_color32(edge),
        array: hex_to_color32("#3b82f6"),
        list: hex_to_color32("#10b981"),
        tree: hex_to_color32("#8b5cf6"),
        heap: hex_to_color32("#f97316"),
        btree: hex_to_color32("#ef4444"),
        search: hex_to_color32("#eab308"),
        traversal: hex_to_color32("#06b6d4"),
        highlight: hex_to_color32("#ef4444"),
        visited: hex_to_color32("#22c55e"),
        eliminated: hex_to_color32("#6b7280"),
        range: hex_to_color32("#fbbf24"),
        easy: hex_to_color32("#16a34a"),
        medium: hex_to_color32("#ca8a04"),
        hard: hex_to_color32("#dc2626"),
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light",
        description: "Slate on white, the classroom look",
        ui: UiColors {
            panel_background: hex_to_color32("#f1f5f9"),
            extreme_background: hex_to_color32("#ffffff"),
            text: hex_to_color32("#0f172a"),
            text_dim: hex_to_color32("#64748b"),
            selection: hex_to_color32("#bfdbfe"),
            hover: hex_to_color32("#e2e8f0"),
            border: hex_to_color32("#cbd5e1"),
            error: hex_to_color32("#dc2626"),
            warning: hex_to_color32("#d97706"),
            link: hex_to_color32("#2563eb"),
        },
        palette: structure_palette("#f8fafc", "#ffffff", "#94a3b8"),
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark",
        description: "Neutral dark greys",
        ui: UiColors {
            panel_background: hex_to_color32("#272727"),
            extreme_background: hex_to_color32("#101010"),
            text: hex_to_color32("#f5f5f5"),
            text_dim: hex_to_color32("#a0a0a0"),
            selection: hex_to_color32("#325078"),
            hover: hex_to_color32("#464646"),
            border: hex_to_color32("#646464"),
            error: hex_to_color32("#e74c3c"),
            warning: hex_to_color32("#f39c12"),
            link: hex_to_color32("#3498db"),
        },
        palette: structure_palette("#1e1e1e", "#ffffff", "#6b7280"),
    }
}

/// Colours from https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula",
        description: "Dracula palette",
        ui: UiColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),
            error: hex_to_color32("#ff5555"),
            warning: hex_to_color32("#ffb86c"),
            link: hex_to_color32("#8be9fd"),
        },
        palette: structure_palette("#21222c", "#f8f8f2", "#6272a4"),
    }
}

fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro",
        description: "One Dark Pro palette",
        ui: UiColors {
            panel_background: hex_to_color32("#282c34"),
            extreme_background: hex_to_color32("#21252b"),
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),
            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            border: hex_to_color32("#5c6370"),
            error: hex_to_color32("#e06c75"),
            warning: hex_to_color32("#d19a66"),
            link: hex_to_color32("#61afef"),
        },
        palette: structure_palette("#21252b", "#ffffff", "#5c6370"),
    }
}

/// Parses `#rrggbb`. Anything else is black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Color32::BLACK;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0)
    };
    Color32::from_rgb(channel(0..2), channel(2..4), channel(4..6))
}

/// Linear blend between two colours, `t` clamped to `0.0..=1.0`.
pub fn lerp_color(from: Color32, to: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
        mix(from.a(), to.a()),
    )
}

/// Scales RGB by `factor`, saturating at 255.
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let scale = |c: u8| (c as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(scale(color.r()), scale(color.g()), scale(color.b()))
}

pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 160.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex_to_color32("#3b82f6"), Color32::from_rgb(0x3b, 0x82, 0xf6));
        assert_eq!(hex_to_color32("xyz"), Color32::BLACK);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }

    #[test]
    fn test_manager_selection() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.current_theme().name, DEFAULT_THEME);
        assert!(manager.set_current_theme("Dracula"));
        assert_eq!(manager.current_theme().name, "Dracula");
        assert!(!manager.set_current_theme("Solarized"));
        assert_eq!(manager.current_theme().name, "Dracula");
        assert_eq!(manager.list_themes().len(), 4);
    }

    #[test]
    fn test_widget_accents_shared_across_themes() {
        let manager = ThemeManager::new();
        let accents: Vec<Color32> = manager
            .list_themes()
            .iter()
            .filter_map(|name| manager.get_theme(name))
            .map(|t| t.palette.heap)
            .collect();
        assert!(accents.iter().all(|c| *c == hex_to_color32("#f97316")));
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(Color32::WHITE), Color32::BLACK);
        assert_eq!(contrast_text(hex_to_color32("#8b5cf6")), Color32::WHITE);
    }
}
