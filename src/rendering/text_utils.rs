//! Text measurement for labels painted inside shapes.

use eframe::egui;

/// Truncates `text` to fit `available_width`, ending in ".." when cut.
///
/// Returns an empty string when not even the ellipsis fits.
pub fn fit_label(
    text: &str,
    available_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    let max_width = available_width - 4.0;
    if max_width <= 0.0 {
        return String::new();
    }

    let width_of = |s: &str| {
        painter
            .layout_no_wrap(s.to_string(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    if width_of(text) <= max_width {
        return text.to_string();
    }

    let ellipsis = "..";
    let available_for_text = max_width - width_of(ellipsis);
    if available_for_text <= 0.0 {
        return String::new();
    }

    // Binary search for the longest prefix that fits.
    let mut low = 0;
    let mut high = text.chars().count();
    let mut best_fit = 0;
    while low <= high {
        let mid = (low + high) / 2;
        let prefix: String = text.chars().take(mid).collect();
        if width_of(&prefix) <= available_for_text {
            best_fit = mid;
            low = mid + 1;
        } else if mid == 0 {
            break;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = text.chars().take(best_fit).collect();
    result.push_str(ellipsis);
    result
}
