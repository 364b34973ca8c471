//! Configuration management for Okey AI
//!
//! Persistent settings with schema versioning and migrations. Configuration
//! is stored in `~/.okey-ai/config.json` and shared by the settings view, the
//! shortcut registry and the host shell.

use crate::icons::IconLibrary;
use crate::settings::AutoSpeakState;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Current config schema version
const CURRENT_VERSION: u32 = 1;

/// Config directory name under the home directory
const CONFIG_DIR: &str = ".okey-ai";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown config version: {0}")]
    UnknownVersion(u32),
}

/// A named global shortcut
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Slot name (e.g. "okey_ai")
    pub name: String,
    /// Hotkey string (e.g. "Ctrl+G")
    pub hot_key: String,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Schema version for migrations
    pub version: u32,
    /// Global shortcuts by slot name
    pub shortcuts: Vec<Shortcut>,
    /// General application settings
    pub general: GeneralConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        let primary = default_primary_modifier();
        Self {
            version: CURRENT_VERSION,
            shortcuts: vec![
                Shortcut {
                    name: crate::shortcuts::shortcut_ids::OKEY_AI.to_string(),
                    hot_key: format!("{primary}+G"),
                },
                Shortcut {
                    name: crate::shortcuts::shortcut_ids::TEST.to_string(),
                    hot_key: format!("{primary}+H"),
                },
            ],
            general: GeneralConfig::default(),
        }
    }
}

impl GlobalConfig {
    /// Hotkey string for a slot
    pub fn shortcut(&self, name: &str) -> Option<&str> {
        self.shortcuts
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.hot_key.as_str())
    }

    /// Set a slot's hotkey, adding the slot if missing.
    ///
    /// Returns the previous hotkey.
    pub fn set_shortcut(&mut self, name: &str, hot_key: &str) -> Option<String> {
        if let Some(existing) = self.shortcuts.iter_mut().find(|s| s.name == name) {
            return Some(std::mem::replace(&mut existing.hot_key, hot_key.to_string()));
        }
        self.shortcuts.push(Shortcut {
            name: name.to_string(),
            hot_key: hot_key.to_string(),
        });
        None
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Hide the translate window when it loses focus
    pub auto_close_translate: bool,
    /// Auto-speak mode for the bubble
    pub auto_speak: AutoSpeakState,
    /// Icon set used by every view
    pub icon_library: IconLibrary,
    /// UI language code (e.g. "en", "zh")
    pub ui_language: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            auto_close_translate: true,
            auto_speak: AutoSpeakState::default(),
            icon_library: IconLibrary::default(),
            ui_language: "en".to_string(),
        }
    }
}

/// `Cmd` on macOS, `Ctrl` elsewhere
pub fn default_primary_modifier() -> &'static str {
    if cfg!(target_os = "macos") {
        "Cmd"
    } else {
        "Ctrl"
    }
}

/// Get the path to the config file (~/.okey-ai/config.json)
pub fn get_config_path() -> PathBuf {
    home_dir_or_fallback().join(CONFIG_DIR).join("config.json")
}

/// Get the home directory, falling back to /tmp if unavailable
fn home_dir_or_fallback() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| {
        tracing::error!("Could not determine home directory, using /tmp");
        PathBuf::from("/tmp")
    })
}

/// Load configuration from disk, migrating older schemas
///
/// A missing file yields the defaults.
pub fn load_from_disk(path: &Path) -> Result<GlobalConfig, ConfigError> {
    if !path.exists() {
        tracing::info!("Config file not found, using defaults");
        return Ok(GlobalConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: GlobalConfig = serde_json::from_str(&contents)?;

    let original_version = config.version;
    let migrated = migrate_config(config)?;
    if migrated.version != original_version {
        tracing::info!(
            "Migrated config from version {} to {}",
            original_version,
            migrated.version
        );
        save_to_disk(path, &migrated)?;
    }

    Ok(migrated)
}

/// Save configuration to disk, creating the directory if needed
pub fn save_to_disk(path: &Path, config: &GlobalConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;

    tracing::debug!("Config saved to {}", path.display());
    Ok(())
}

/// Migrate configuration from older schema versions
fn migrate_config(mut config: GlobalConfig) -> Result<GlobalConfig, ConfigError> {
    while config.version < CURRENT_VERSION {
        config = apply_migration(config)?;
    }
    if config.version > CURRENT_VERSION {
        return Err(ConfigError::UnknownVersion(config.version));
    }
    Ok(config)
}

/// Apply a single migration step
fn apply_migration(config: GlobalConfig) -> Result<GlobalConfig, ConfigError> {
    match config.version {
        // Version 0 -> 1: versioned schema, general section added
        0 => {
            let mut migrated = config;
            migrated.version = 1;
            Ok(migrated)
        }
        v => Err(ConfigError::UnknownVersion(v)),
    }
}

/// Config file plus its in-memory cache
///
/// Writes go to disk first; the cache only changes once the save succeeded.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    cached: RwLock<GlobalConfig>,
}

impl ConfigStore {
    /// Open the store at `path`. Unreadable or corrupt files fall back to defaults.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let config = load_from_disk(&path).unwrap_or_else(|e| {
            tracing::error!("Failed to load config, using defaults: {}", e);
            GlobalConfig::default()
        });
        tracing::info!(
            "Config loaded from {} ({} shortcuts)",
            path.display(),
            config.shortcuts.len()
        );
        Self {
            path,
            cached: RwLock::new(config),
        }
    }

    /// Open the store at `~/.okey-ai/config.json`
    pub fn open_default() -> Self {
        Self::load(get_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the current configuration
    pub fn get(&self) -> GlobalConfig {
        self.cached.read().clone()
    }

    /// Replace the configuration
    pub fn set(&self, mut config: GlobalConfig) -> Result<(), ConfigError> {
        config.version = CURRENT_VERSION;
        save_to_disk(&self.path, &config)?;
        *self.cached.write() = config;
        tracing::info!("Configuration updated");
        Ok(())
    }

    /// Modify the configuration in place and persist it
    pub fn update<F>(&self, f: F) -> Result<(), ConfigError>
    where
        F: FnOnce(&mut GlobalConfig),
    {
        let mut cached = self.cached.write();
        let mut next = cached.clone();
        f(&mut next);
        save_to_disk(&self.path, &next)?;
        *cached = next;
        Ok(())
    }

    /// Reset to defaults and persist
    pub fn reset(&self) -> Result<GlobalConfig, ConfigError> {
        let default_config = GlobalConfig::default();
        save_to_disk(&self.path, &default_config)?;
        *self.cached.write() = default_config.clone();
        tracing::info!("Configuration reset to defaults");
        Ok(default_config)
    }
}
