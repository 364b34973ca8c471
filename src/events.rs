//! Event and command names shared with the webview

/// Events emitted by the host
pub mod event_names {
    pub const BUBBLE_AUTO_SPEAK: &str = "BUBBLE_AUTO_SPEAK";
    pub const BUBBLE_CLEAN: &str = "BUBBLE_CLEAN";
    pub const AI_RESPONSE: &str = "AI_RESPONSE";
    pub const AI_ERROR: &str = "AI_ERROR";
    /// Sent by a view once it has mounted
    pub const PAGE_LOADED: &str = "PAGE_LOADED";
}

/// IPC commands the views invoke
pub mod command_names {
    pub const REGISTER_HOTKEY: &str = "register_hotkey_okey_ai";
    pub const TOGGLE_AUTO_CLOSE_WINDOW: &str = "toggle_auto_close_translate";
    pub const GET_AUTO_CLOSE_WINDOW_STATE: &str = "get_auto_close_translate_state";
    pub const DETECT_LANGUAGE: &str = "detect_language";
    pub const GET_AUTO_SPEAK_STATE: &str = "get_auto_speak_state";
    pub const TOGGLE_AUTO_SPEAK: &str = "toggle_auto_speak";
    pub const GET_ICON_LIBRARY: &str = "get_icon_library";
    pub const GET_UI_LANGUAGE: &str = "get_ui_language";
}
