//! Global shortcuts for Okey AI
//!
//! The host-side end of hotkey registration. A committed combo from the
//! recorder lands here: it is bound on the platform backend, written to the
//! persisted config under its slot name, and only then is the slot's previous
//! binding released.
//!
//! Backends:
//! - `manager::TauriShortcutBackend` (feature `tauri-host`): Tauri's
//!   GlobalShortcut plugin
//! - anything implementing [`GlobalShortcutBackend`]

pub mod conflict;
#[cfg(feature = "tauri-host")]
pub mod manager;

pub use conflict::{create_conflict, suggest_alternatives, ConflictReason, ShortcutConflict};

use crate::config::{ConfigError, ConfigStore};
use crate::hotkey::Hotkey;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Shortcut slot names
pub mod shortcut_ids {
    /// Translate the current selection
    pub const OKEY_AI: &str = "okey_ai";
    pub const TEST: &str = "test";
}

/// Why a registration did not go through
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Conflict(ShortcutConflict),

    #[error("Shortcut backend error: {0}")]
    Backend(String),

    #[error("Failed to save shortcut config: {0}")]
    Config(#[from] ConfigError),
}

/// Receives a committed hotkey from the recorder
///
/// The recorder treats this as fire-and-forget: it never waits on or rolls
/// back for the result. Implementations that need acknowledgment can add it
/// behind this trait.
pub trait HotkeyRegistrar: Send + Sync {
    fn register(&self, hotkey: &Hotkey) -> Result<(), RegistrationError>;
}

/// Platform facility that actually owns global key bindings
pub trait GlobalShortcutBackend: Send + Sync {
    /// Bind `hotkey`; presses are routed to the slot `name`
    fn register(&self, name: &str, hotkey: &Hotkey) -> Result<(), String>;
    fn unregister(&self, hotkey: &Hotkey) -> Result<(), String>;
    fn is_registered(&self, hotkey: &Hotkey) -> bool;
}

/// A bound shortcut slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutInfo {
    pub name: String,
    pub hot_key: String,
}

/// Named shortcut slots, kept in sync with config and the backend
pub struct ShortcutRegistry {
    backend: Arc<dyn GlobalShortcutBackend>,
    config: Arc<ConfigStore>,
    bound: RwLock<HashMap<String, Hotkey>>,
}

impl ShortcutRegistry {
    pub fn new(backend: Arc<dyn GlobalShortcutBackend>, config: Arc<ConfigStore>) -> Self {
        Self {
            backend,
            config,
            bound: RwLock::new(HashMap::new()),
        }
    }

    /// Bind every shortcut from config. Failures are logged and skipped.
    ///
    /// Returns the number of shortcuts bound.
    pub fn init_shortcuts(&self) -> usize {
        let shortcuts = self.config.get().shortcuts;
        let mut count = 0;

        for shortcut in shortcuts {
            let hotkey = match shortcut.hot_key.parse::<Hotkey>() {
                Ok(hotkey) => hotkey,
                Err(e) => {
                    tracing::warn!(
                        "Skipping shortcut '{}' with invalid hotkey '{}': {}",
                        shortcut.name,
                        shortcut.hot_key,
                        e
                    );
                    continue;
                }
            };

            match self.backend.register(&shortcut.name, &hotkey) {
                Ok(()) => {
                    tracing::info!("Registered shortcut: {} ({})", shortcut.name, hotkey);
                    self.bound.write().insert(shortcut.name, hotkey);
                    count += 1;
                }
                Err(e) => {
                    tracing::error!("Failed to register shortcut {}: {}", hotkey, e);
                }
            }
        }

        count
    }

    /// Rebind the slot `name` to `hotkey`
    ///
    /// The new combo is bound first; config is written only if that succeeds,
    /// and the old combo is released last.
    pub fn register_hotkey(&self, name: &str, hotkey: &Hotkey) -> Result<(), RegistrationError> {
        if self.bound.read().get(name) == Some(hotkey) {
            tracing::debug!("Shortcut '{}' already bound to {}", name, hotkey);
            return Ok(());
        }

        if self.backend.is_registered(hotkey) {
            let reason = match self.slot_holding(hotkey) {
                Some(slot) => ConflictReason::InUseBySlot(slot),
                None => ConflictReason::TakenElsewhere,
            };
            tracing::debug!("Shortcut '{}' is already registered: {}", hotkey, reason);
            return Err(RegistrationError::Conflict(create_conflict(hotkey, name, reason)));
        }

        if let Err(e) = self.backend.register(name, hotkey) {
            tracing::warn!("Failed to register new hotkey {}: {}", hotkey, e);
            let reason = ConflictReason::from_backend_error(&e);
            return Err(RegistrationError::Conflict(create_conflict(hotkey, name, reason)));
        }
        tracing::info!("Registered hotkey for '{}': {}", name, hotkey);

        let saved = self.config.update(|config| {
            config.set_shortcut(name, &hotkey.to_string());
        });
        if let Err(e) = saved {
            // Leave the previous binding in place; undo the new one
            if let Err(undo) = self.backend.unregister(hotkey) {
                tracing::warn!("Failed to release {} after config error: {}", hotkey, undo);
            }
            return Err(e.into());
        }

        let previous = self.bound.write().insert(name.to_string(), hotkey.clone());
        if let Some(old) = previous.filter(|old| old != hotkey) {
            match self.backend.unregister(&old) {
                Ok(()) => tracing::info!("Unregistered old hotkey {}", old),
                Err(e) => tracing::warn!("Failed to unregister old hotkey {}: {}", old, e),
            }
        }

        Ok(())
    }

    /// Release the slot `name`, keeping its config entry
    ///
    /// The slot stays bound if the backend refuses to release it.
    pub fn unregister(&self, name: &str) -> Result<(), RegistrationError> {
        let mut bound = self.bound.write();
        let Some(hotkey) = bound.get(name) else {
            return Err(RegistrationError::Backend(format!(
                "Shortcut '{}' is not registered",
                name
            )));
        };
        self.backend
            .unregister(hotkey)
            .map_err(RegistrationError::Backend)?;
        tracing::info!("Unregistered shortcut: {} ({})", name, hotkey);
        bound.remove(name);
        Ok(())
    }

    /// Slot currently bound to `hotkey`, if any
    fn slot_holding(&self, hotkey: &Hotkey) -> Option<String> {
        self.bound
            .read()
            .iter()
            .find(|(_, bound)| *bound == hotkey)
            .map(|(slot, _)| slot.clone())
    }

    /// Currently bound slots, sorted by name
    pub fn list_registered(&self) -> Vec<ShortcutInfo> {
        let mut list: Vec<ShortcutInfo> = self
            .bound
            .read()
            .iter()
            .map(|(name, hotkey)| ShortcutInfo {
                name: name.clone(),
                hot_key: hotkey.to_string(),
            })
            .collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    pub fn bound_hotkey(&self, name: &str) -> Option<Hotkey> {
        self.bound.read().get(name).cloned()
    }

    /// A registrar that rebinds one slot, for handing to a recorder
    pub fn registrar_for(self: &Arc<Self>, name: &str) -> Arc<dyn HotkeyRegistrar> {
        Arc::new(SlotRegistrar {
            registry: Arc::clone(self),
            name: name.to_string(),
        })
    }
}

/// Registers committed hotkeys into a single named slot
struct SlotRegistrar {
    registry: Arc<ShortcutRegistry>,
    name: String,
}

impl HotkeyRegistrar for SlotRegistrar {
    fn register(&self, hotkey: &Hotkey) -> Result<(), RegistrationError> {
        self.registry.register_hotkey(&self.name, hotkey)
    }
}
