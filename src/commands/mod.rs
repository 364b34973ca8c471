//! Tauri command handlers
//!
//! IPC commands invoked by the settings, translate and bubble views.

use crate::hotkey::{Hotkey, HotkeyParseError};
use crate::icons::IconLibrary;
use crate::settings::{AppState, AutoSpeakState};
use crate::shortcuts::{shortcut_ids, ShortcutRegistry};
use std::sync::Arc;
use tauri::State;

/// Rebind the translate shortcut to a hotkey captured by the recorder
#[tauri::command]
pub fn register_hotkey_okey_ai(
    registry: State<'_, Arc<ShortcutRegistry>>,
    shortcut: String,
) -> Result<(), String> {
    let hotkey: Hotkey = shortcut
        .parse()
        .map_err(|e: HotkeyParseError| e.to_string())?;
    registry
        .register_hotkey(shortcut_ids::OKEY_AI, &hotkey)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn toggle_auto_speak(state: State<'_, AppState>) -> AutoSpeakState {
    state.toggle_auto_speak()
}

#[tauri::command]
pub fn get_auto_speak_state(state: State<'_, AppState>) -> AutoSpeakState {
    state.auto_speak()
}

#[tauri::command]
pub fn toggle_auto_close_translate(state: State<'_, AppState>) -> bool {
    state.toggle_auto_close_translate()
}

#[tauri::command]
pub fn get_auto_close_translate_state(state: State<'_, AppState>) -> bool {
    state.auto_close_translate()
}

#[tauri::command]
pub fn detect_language(text: &str) -> String {
    crate::speech::detect_language(text).to_string()
}

#[tauri::command]
pub fn get_icon_library(state: State<'_, AppState>) -> IconLibrary {
    state.icon_library()
}

#[tauri::command]
pub fn get_ui_language(state: State<'_, AppState>) -> String {
    state.ui_language()
}
