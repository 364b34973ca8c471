//! Runtime view settings shared with the host
//!
//! Holds the toggles the translate and bubble views flip at runtime, plus the
//! icon library and UI language picked once from config.

use crate::config::{ConfigStore, GeneralConfig};
use crate::icons::{icon_set, IconLibrary, IconSet};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// How much of a translation is read aloud automatically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutoSpeakState {
    /// Completely off
    Off,
    /// Read single words only
    #[default]
    Single,
    /// Read full sentences
    All,
}

impl AutoSpeakState {
    /// Off -> Single -> All -> Off
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::Single,
            Self::Single => Self::All,
            Self::All => Self::Off,
        }
    }

    /// Whether a text of `word_count` words should be spoken
    pub fn should_speak(self, word_count: usize) -> bool {
        match self {
            Self::Off => false,
            Self::Single => word_count == 1,
            Self::All => word_count > 0,
        }
    }
}

impl fmt::Display for AutoSpeakState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Single => write!(f, "single"),
            Self::All => write!(f, "all"),
        }
    }
}

#[derive(Debug)]
struct AppStateInner {
    auto_close_translate: bool,
    auto_speak: AutoSpeakState,
    icon_library: IconLibrary,
    ui_language: String,
}

/// Mutable runtime state behind the settings toggles
///
/// When backed by a [`ConfigStore`], every toggle is written through to the
/// general section of the config file.
#[derive(Debug)]
pub struct AppState {
    inner: Mutex<AppStateInner>,
    store: Option<Arc<ConfigStore>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&GeneralConfig::default())
    }
}

impl AppState {
    /// In-memory state seeded from config; toggles are not persisted
    pub fn from_config(general: &GeneralConfig) -> Self {
        Self {
            inner: Mutex::new(AppStateInner {
                auto_close_translate: general.auto_close_translate,
                auto_speak: general.auto_speak,
                icon_library: general.icon_library,
                ui_language: general.ui_language.clone(),
            }),
            store: None,
        }
    }

    /// State seeded from and persisted to `store`
    pub fn with_store(store: Arc<ConfigStore>) -> Self {
        let mut state = Self::from_config(&store.get().general);
        state.store = Some(store);
        state
    }

    pub fn auto_speak(&self) -> AutoSpeakState {
        self.inner.lock().auto_speak
    }

    /// Advance the auto-speak cycle and return the new state
    pub fn toggle_auto_speak(&self) -> AutoSpeakState {
        let next = {
            let mut inner = self.inner.lock();
            inner.auto_speak = inner.auto_speak.next();
            inner.auto_speak
        };
        tracing::debug!("Auto speak: {}", next);
        self.persist(|general| general.auto_speak = next);
        next
    }

    pub fn auto_close_translate(&self) -> bool {
        self.inner.lock().auto_close_translate
    }

    /// Flip auto-close and return the new value
    pub fn toggle_auto_close_translate(&self) -> bool {
        let next = {
            let mut inner = self.inner.lock();
            inner.auto_close_translate = !inner.auto_close_translate;
            inner.auto_close_translate
        };
        tracing::debug!("Auto close translate: {}", next);
        self.persist(|general| general.auto_close_translate = next);
        next
    }

    pub fn icon_library(&self) -> IconLibrary {
        self.inner.lock().icon_library
    }

    /// The icon set every view renders through
    pub fn icons(&self) -> &'static dyn IconSet {
        icon_set(self.icon_library())
    }

    pub fn ui_language(&self) -> String {
        self.inner.lock().ui_language.clone()
    }

    /// Write a change through to the config file. Failures are logged; the
    /// in-memory value stays.
    fn persist(&self, apply: impl FnOnce(&mut GeneralConfig)) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(e) = store.update(|config| apply(&mut config.general)) {
            tracing::warn!("Failed to persist settings: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_speak_cycle() {
        let state = AppState::default();
        assert_eq!(state.auto_speak(), AutoSpeakState::Single);
        assert_eq!(state.toggle_auto_speak(), AutoSpeakState::All);
        assert_eq!(state.toggle_auto_speak(), AutoSpeakState::Off);
        assert_eq!(state.toggle_auto_speak(), AutoSpeakState::Single);
    }

    #[test]
    fn test_auto_speak_serialises_lowercase() {
        assert_eq!(serde_json::to_string(&AutoSpeakState::All).unwrap(), "\"all\"");
        let state: AutoSpeakState = serde_json::from_str("\"off\"").unwrap();
        assert_eq!(state, AutoSpeakState::Off);
        assert_eq!(AutoSpeakState::Single.to_string(), "single");
    }

    #[test]
    fn test_should_speak() {
        assert!(!AutoSpeakState::Off.should_speak(1));
        assert!(AutoSpeakState::Single.should_speak(1));
        assert!(!AutoSpeakState::Single.should_speak(4));
        assert!(AutoSpeakState::All.should_speak(4));
        assert!(!AutoSpeakState::All.should_speak(0));
    }

    #[test]
    fn test_state_from_config() {
        let general = GeneralConfig {
            auto_close_translate: false,
            auto_speak: AutoSpeakState::Off,
            ..GeneralConfig::default()
        };
        let state = AppState::from_config(&general);
        assert!(!state.auto_close_translate());
        assert!(state.toggle_auto_close_translate());
        assert_eq!(state.auto_speak(), AutoSpeakState::Off);
    }

    #[test]
    fn test_toggles_persist_through_store() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let state = AppState::with_store(Arc::new(ConfigStore::load(&path)));

        assert_eq!(state.toggle_auto_speak(), AutoSpeakState::All);
        assert!(!state.toggle_auto_close_translate());

        let reopened = AppState::with_store(Arc::new(ConfigStore::load(&path)));
        assert_eq!(reopened.auto_speak(), AutoSpeakState::All);
        assert!(!reopened.auto_close_translate());
    }

    #[test]
    fn test_icon_set_and_language_come_from_config() {
        let general = GeneralConfig {
            icon_library: IconLibrary::Hugeicons,
            ui_language: "zh".to_string(),
            ..GeneralConfig::default()
        };
        let state = AppState::from_config(&general);
        assert_eq!(state.icons().library(), IconLibrary::Hugeicons);
        assert_eq!(state.ui_language(), "zh");

        let default = AppState::default();
        assert_eq!(default.icons().library(), IconLibrary::Lucide);
        assert_eq!(default.ui_language(), "en");
        assert!(default.auto_close_translate());
    }
}
