//! Settings persistence coordination.
//!
//! Each preference lives under its own key in eframe storage as a JSON
//! string. Missing or malformed values fall back to defaults one key at a
//! time, so a bad entry never resets the others.

use rdsviz::Language;
use serde::{Deserialize, Serialize};

use crate::state::{LayoutState, Tab};

const ACTIVE_TAB_KEY: &str = "active_tab";
const ANIMATION_SPEED_KEY: &str = "animation_speed";
const JUDGE_LANGUAGE_KEY: &str = "judge_language";

/// Preferences restored at startup (the theme is handled by
/// [`ThemeCoordinator`](super::ThemeCoordinator)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preferences {
    pub active_tab: Tab,
    pub animation_speed: f32,
    pub judge_language: Language,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            animation_speed: 1.0,
            judge_language: Language::default(),
        }
    }
}

impl Preferences {
    /// Layout state seeded from these preferences.
    pub fn layout(&self) -> LayoutState {
        let mut layout = LayoutState::new();
        layout.set_active_tab(self.active_tab);
        layout.set_animation_speed(self.animation_speed);
        layout
    }
}

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting, falling back to `T::default()`.
    pub fn load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> T
    where
        T: for<'de> Deserialize<'de> + Default,
    {
        Self::try_load_setting(storage, key).unwrap_or_default()
    }

    /// Loads a setting with a custom default.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Returns `None` if the key is missing or does not parse.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        serde_json::from_str(&json_str).ok()
    }

    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
        }
    }

    // ===== Preferences =====

    pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> Preferences {
        let defaults = Preferences::default();
        Preferences {
            active_tab: Self::load_setting(storage, ACTIVE_TAB_KEY),
            animation_speed: Self::load_setting_or(
                storage,
                ANIMATION_SPEED_KEY,
                defaults.animation_speed,
            ),
            judge_language: Self::load_setting(storage, JUDGE_LANGUAGE_KEY),
        }
    }

    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &Preferences) {
        Self::save_setting(storage, ACTIVE_TAB_KEY, &preferences.active_tab);
        Self::save_setting(storage, ANIMATION_SPEED_KEY, &preferences.animation_speed);
        Self::save_setting(storage, JUDGE_LANGUAGE_KEY, &preferences.judge_language);
        storage.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use eframe::Storage;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_simple() {
        let mut storage = MockStorage::new();
        SettingsCoordinator::save_setting(&mut storage, "test_key", &42i32);
        let loaded: i32 = SettingsCoordinator::load_setting(Some(&storage), "test_key");
        assert_eq!(loaded, 42);
    }

    #[test]
    fn test_missing_storage_gives_defaults() {
        assert_eq!(SettingsCoordinator::load_preferences(None), Preferences::default());
    }

    #[test]
    fn test_preferences_round_trip() {
        let mut storage = MockStorage::new();
        let preferences = Preferences {
            active_tab: Tab::Heap,
            animation_speed: 2.0,
            judge_language: Language::Cpp,
        };
        SettingsCoordinator::save_preferences(&mut storage, &preferences);
        assert_eq!(storage.data.get(JUDGE_LANGUAGE_KEY).map(String::as_str), Some("\"cpp\""));

        let loaded = SettingsCoordinator::load_preferences(Some(&storage));
        assert_eq!(loaded, preferences);
        assert_eq!(loaded.layout().active_tab(), Tab::Heap);
    }

    #[test]
    fn test_malformed_key_falls_back_alone() {
        let mut storage = MockStorage::new();
        storage.set_string(ACTIVE_TAB_KEY, "\"Compare\"".to_string());
        storage.set_string(ANIMATION_SPEED_KEY, "fast".to_string());

        let loaded = SettingsCoordinator::load_preferences(Some(&storage));
        assert_eq!(loaded.active_tab, Tab::Compare);
        assert_eq!(loaded.animation_speed, 1.0);
        assert_eq!(loaded.judge_language, Language::Python);
    }
}
