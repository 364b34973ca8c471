//! Raw keyboard input as delivered by the UI layer

use serde::{Deserialize, Serialize};

/// Modifier flags at the moment of a key transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Meta / Command / Super
    pub meta: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        meta: false,
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// True when none of the four modifiers is held
    pub fn all_released(self) -> bool {
        !(self.meta || self.ctrl || self.alt || self.shift)
    }
}

/// A single physical key transition (key-down or key-up)
///
/// Field names follow the DOM `KeyboardEvent` so webview payloads
/// deserialise directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    /// Physical key identifier (e.g. "KeyK", "Digit5", "NumpadEnter")
    pub code: String,
    /// Logical key name (e.g. "k", "Control")
    pub key: String,
    #[serde(flatten)]
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: impl Into<String>, key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            code: code.into(),
            key: key.into(),
            modifiers,
        }
    }

    /// Whether the logical key is itself a bare modifier
    pub fn is_bare_modifier(&self) -> bool {
        matches!(self.key.as_str(), "Control" | "Alt" | "Shift" | "Meta")
    }
}
