//! Tauri global-shortcut backend
//!
//! Binds hotkeys through `tauri-plugin-global-shortcut`. Hotkey strings are
//! passed through unchanged; the plugin's accelerator parser understands the
//! `Cmd`/`Ctrl`/`Alt`/`Shift` tokens and the key names the recorder emits.

use super::GlobalShortcutBackend;
use crate::hotkey::Hotkey;
use std::sync::Arc;
use tauri::{AppHandle, Runtime};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, ShortcutState};

/// Called with the slot name when a bound shortcut is pressed
pub type TriggerHandler<R> = Arc<dyn Fn(&AppHandle<R>, &str) + Send + Sync>;

pub struct TauriShortcutBackend<R: Runtime> {
    app: AppHandle<R>,
    on_trigger: TriggerHandler<R>,
}

impl<R: Runtime> TauriShortcutBackend<R> {
    pub fn new(app: AppHandle<R>, on_trigger: TriggerHandler<R>) -> Self {
        Self { app, on_trigger }
    }
}

impl<R: Runtime> GlobalShortcutBackend for TauriShortcutBackend<R> {
    fn register(&self, name: &str, hotkey: &Hotkey) -> Result<(), String> {
        let accelerator = hotkey.to_string();
        let slot = name.to_string();
        let handler = Arc::clone(&self.on_trigger);

        tracing::debug!(
            "Registering shortcut handler for '{}' (accelerator: '{}')",
            name,
            accelerator
        );

        self.app
            .global_shortcut()
            .on_shortcut(accelerator.as_str(), move |app, shortcut, event| {
                if event.state == ShortcutState::Pressed {
                    tracing::info!("Shortcut triggered: {} ({:?})", slot, shortcut);
                    handler(app, &slot);
                }
            })
            .map_err(|e| e.to_string())
    }

    fn unregister(&self, hotkey: &Hotkey) -> Result<(), String> {
        let accelerator = hotkey.to_string();
        self.app
            .global_shortcut()
            .unregister(accelerator.as_str())
            .map_err(|e| e.to_string())
    }

    fn is_registered(&self, hotkey: &Hotkey) -> bool {
        let accelerator = hotkey.to_string();
        self.app.global_shortcut().is_registered(accelerator.as_str())
    }
}
