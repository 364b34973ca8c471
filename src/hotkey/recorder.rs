//! Hotkey recorder state machine
//!
//! One recorder per rendered hotkey control. All transitions happen
//! synchronously inside the UI event handler; the only outward call is the
//! fire-and-forget registration on commit.

use super::combo::{is_valid_combination, split_tokens, Hotkey};
use super::decode::{decode, is_rejected_code};
use super::key_event::KeyEvent;
use crate::shortcuts::HotkeyRegistrar;
use std::sync::Arc;

/// Callback invoked once per successful commit
pub type HotkeyChangeCallback = Box<dyn FnMut(&Hotkey)>;

/// Whether the control is capturing input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording,
}

/// Accessibility label for the control's current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AriaLabel {
    /// Actively capturing keys
    Recording,
    /// Idle with a hotkey to show
    SetHotkey,
    /// Nothing to show yet
    PressToSet,
}

impl AriaLabel {
    /// Translation key used by the i18n layer
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Recording => "hotkey.recording_hotkey",
            Self::SetHotkey => "hotkey.set_hotkey",
            Self::PressToSet => "hotkey.press_to_set_hotkey",
        }
    }
}

/// What the control should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotkeyDisplay {
    /// Tokens to render with a `+` glyph between them; `None` shows the placeholder prompt
    pub tokens: Option<Vec<String>>,
    /// Show the blinking recording marker
    pub recording_indicator: bool,
}

impl HotkeyDisplay {
    /// Tokens joined by the `+` glyph, if any
    pub fn joined(&self) -> Option<String> {
        self.tokens.as_ref().map(|t| t.join("+"))
    }
}

pub struct HotkeyRecorder {
    state: RecorderState,
    pressed_keys: Vec<String>,
    /// Last known hotkey, as supplied by the caller or committed here
    hotkey: String,
    registrar: Arc<dyn HotkeyRegistrar>,
    on_change: Option<HotkeyChangeCallback>,
}

impl HotkeyRecorder {
    pub fn new(hotkey: impl Into<String>, registrar: Arc<dyn HotkeyRegistrar>) -> Self {
        Self {
            state: RecorderState::Idle,
            pressed_keys: Vec::new(),
            hotkey: hotkey.into(),
            registrar,
            on_change: None,
        }
    }

    /// Set the change callback
    pub fn on_change(mut self, callback: impl FnMut(&Hotkey) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> RecorderState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecorderState::Recording
    }

    pub fn pressed_keys(&self) -> &[String] {
        &self.pressed_keys
    }

    pub fn hotkey(&self) -> &str {
        &self.hotkey
    }

    /// Replace the displayed hotkey (e.g. after loading config)
    pub fn set_hotkey(&mut self, hotkey: impl Into<String>) {
        self.hotkey = hotkey.into();
    }

    /// Click/focus: start capturing
    pub fn activate(&mut self) {
        tracing::debug!("Hotkey recorder: recording");
        self.state = RecorderState::Recording;
        self.pressed_keys.clear();
    }

    /// Focus lost: abandon the capture
    pub fn blur(&mut self) {
        if self.is_recording() {
            tracing::debug!("Hotkey recorder: blurred, discarding {:?}", self.pressed_keys);
        }
        self.reset();
    }

    /// Handle a key-down. Only the latest decode is kept.
    pub fn key_down(&mut self, event: &KeyEvent) {
        if !self.is_recording() || is_rejected_code(&event.code) {
            return;
        }
        let Some(decoded) = decode(event) else {
            return;
        };
        if decoded.is_empty() {
            return;
        }
        self.pressed_keys = decoded.tokens();
        tracing::debug!("Hotkey recorder: pressed {:?}", self.pressed_keys);
    }

    /// Handle a key-up. Returns the committed hotkey when the release
    /// completes a valid combination.
    pub fn key_up(&mut self, event: &KeyEvent) -> Option<Hotkey> {
        if !self.is_recording()
            || !event.modifiers.all_released()
            || self.pressed_keys.is_empty()
        {
            return None;
        }

        let keys = std::mem::take(&mut self.pressed_keys);
        self.state = RecorderState::Idle;

        if !is_valid_combination(&keys) {
            tracing::warn!(
                "Invalid hotkey: must include at least one modifier (Cmd/Ctrl/Alt/Shift) and one main key: {:?}",
                keys
            );
            return None;
        }

        match Hotkey::from_tokens(keys) {
            Ok(hotkey) => {
                self.commit(&hotkey);
                Some(hotkey)
            }
            Err(e) => {
                tracing::warn!("Discarding captured hotkey: {}", e);
                None
            }
        }
    }

    /// Current render state
    pub fn display(&self) -> HotkeyDisplay {
        let tokens = if self.is_recording() {
            Some(self.pressed_keys.clone()).filter(|k| !k.is_empty())
        } else {
            Some(split_tokens(&self.hotkey)).filter(|k| !k.is_empty())
        };
        HotkeyDisplay {
            tokens,
            recording_indicator: self.is_recording(),
        }
    }

    pub fn aria_label(&self) -> AriaLabel {
        if self.is_recording() {
            AriaLabel::Recording
        } else if split_tokens(&self.hotkey).is_empty() {
            AriaLabel::PressToSet
        } else {
            AriaLabel::SetHotkey
        }
    }

    fn commit(&mut self, hotkey: &Hotkey) {
        tracing::info!("Hotkey captured: {}", hotkey);
        self.hotkey = hotkey.to_string();

        if let Some(callback) = self.on_change.as_mut() {
            callback(hotkey);
        }

        // Optimistic: the recorder has already moved on whatever the host says
        if let Err(e) = self.registrar.register(hotkey) {
            tracing::warn!("Host rejected hotkey '{}': {}", hotkey, e);
        }
    }

    fn reset(&mut self) {
        self.state = RecorderState::Idle;
        self.pressed_keys.clear();
    }
}

impl std::fmt::Debug for HotkeyRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotkeyRecorder")
            .field("state", &self.state)
            .field("pressed_keys", &self.pressed_keys)
            .field("hotkey", &self.hotkey)
            .finish_non_exhaustive()
    }
}
