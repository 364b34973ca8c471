//! Hotkey capture for the settings and translate views
//!
//! Turns raw key-down/key-up events from the UI input layer into canonical
//! `Mod+Key` strings that the host registers as global shortcuts.
//!
//! - [`decode`]: pure mapping from a [`KeyEvent`] to canonical key tokens
//! - [`Hotkey`]: the `+`-joined string form, parsed and validated
//! - [`HotkeyRecorder`]: the idle/recording state machine behind the control

pub mod combo;
pub mod decode;
pub mod key_event;
pub mod recorder;

pub use combo::{Hotkey, HotkeyParseError, Modifier};
pub use decode::{decode, is_rejected_code, DecodedKeys};
pub use key_event::{KeyEvent, Modifiers};
pub use recorder::{AriaLabel, HotkeyDisplay, HotkeyRecorder, RecorderState};
