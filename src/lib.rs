//! Okey AI - view-side core of the translation assistant
//!
//! Hotkey capture for the settings view, the global shortcut registry it
//! feeds, persisted config, and the small pieces of shared view state
//! (selection, auto-speak, copy feedback, icons).

pub mod clipboard;
#[cfg(feature = "tauri-host")]
pub mod commands;
pub mod config;
pub mod events;
pub mod hotkey;
pub mod icons;
pub mod logging;
pub mod selection;
pub mod settings;
pub mod shortcuts;
pub mod speech;

pub use hotkey::{decode, Hotkey, HotkeyRecorder, KeyEvent, Modifiers};
pub use shortcuts::{GlobalShortcutBackend, HotkeyRegistrar, RegistrationError, ShortcutRegistry};

/// Wire the shortcut registry and runtime state into a Tauri app
///
/// Loads config, binds the configured shortcuts, and manages
/// `Arc<ShortcutRegistry>` and `AppState` for the IPC commands. `AppState`
/// carries the configured icon set and writes toggles back to config.
#[cfg(feature = "tauri-host")]
pub fn setup_host<R: tauri::Runtime>(
    app: &tauri::AppHandle<R>,
    on_trigger: shortcuts::manager::TriggerHandler<R>,
) -> std::sync::Arc<ShortcutRegistry> {
    use std::sync::Arc;
    use tauri::Manager;

    logging::init_logging(&logging::default_log_dir());

    let config = Arc::new(config::ConfigStore::open_default());
    let state = settings::AppState::with_store(Arc::clone(&config));
    tracing::info!(
        "Icon set: {:?}, UI language: {}",
        state.icons().library(),
        state.ui_language()
    );

    let backend = Arc::new(shortcuts::manager::TauriShortcutBackend::new(
        app.clone(),
        on_trigger,
    ));
    let registry = Arc::new(ShortcutRegistry::new(backend, config));
    let count = registry.init_shortcuts();
    tracing::info!("Okey AI host ready ({} shortcuts bound)", count);

    app.manage(Arc::clone(&registry));
    app.manage(state);
    registry
}
