//! Key decoding: `KeyEvent` -> canonical key tokens
//!
//! Pure and total. Rejected codes produce nothing; every other code yields a
//! token, falling back to the raw physical code when no mapping applies.

use super::combo::Modifier;
use super::key_event::KeyEvent;
use regex::Regex;
use std::sync::OnceLock;

/// Physical codes ignored while recording
const REJECTED_CODES: &[&str] = &[
    "CapsLock",
    "NumLock",
    "ScrollLock",
    "ContextMenu",
    "Escape",
    "Tab",
    "Pause",
    "Power",
    "WakeUp",
    "PrintScreen",
];

/// Numpad keys kept under their full code name
const NUMPAD_VERBATIM: &[&str] = &[
    "NumpadEnter",
    "NumpadAdd",
    "NumpadSubtract",
    "NumpadMultiply",
    "NumpadDivide",
    "NumpadDecimal",
];

static FUNCTION_KEY: OnceLock<Regex> = OnceLock::new();

fn function_key_pattern() -> &'static Regex {
    FUNCTION_KEY.get_or_init(|| Regex::new(r"^F\d+$").expect("static pattern is valid"))
}

/// Result of decoding one key-down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedKeys {
    /// Modifier tokens in emission order (Cmd|Ctrl, Alt, Shift)
    pub modifiers: Vec<Modifier>,
    /// The single non-modifier token, absent for a bare modifier press
    pub key: Option<String>,
}

impl DecodedKeys {
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.key.is_none()
    }

    /// Modifiers first, then the key
    pub fn tokens(&self) -> Vec<String> {
        self.modifiers
            .iter()
            .map(|m| m.as_str().to_string())
            .chain(self.key.iter().cloned())
            .collect()
    }
}

/// Whether a physical code is ignored while recording
pub fn is_rejected_code(code: &str) -> bool {
    REJECTED_CODES.contains(&code)
}

/// Decode a key-down event
///
/// Returns `None` for rejected codes. Meta wins over Control: the two share
/// one primary-modifier slot and are never emitted together.
pub fn decode(event: &KeyEvent) -> Option<DecodedKeys> {
    if is_rejected_code(&event.code) {
        return None;
    }

    let flags = event.modifiers;
    let mut modifiers = Vec::with_capacity(3);
    if flags.meta {
        modifiers.push(Modifier::Cmd);
    } else if flags.ctrl {
        modifiers.push(Modifier::Ctrl);
    }
    if flags.alt {
        modifiers.push(Modifier::Alt);
    }
    if flags.shift {
        modifiers.push(Modifier::Shift);
    }

    let key = if event.is_bare_modifier() {
        None
    } else {
        Some(code_to_token(&event.code)).filter(|t| !t.is_empty())
    };

    Some(DecodedKeys { modifiers, key })
}

/// Map a physical code to its non-modifier token
pub fn code_to_token(code: &str) -> String {
    if let Some(letter) = code.strip_prefix("Key") {
        return letter.to_string();
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        return digit.to_string();
    }
    if let Some(rest) = code.strip_prefix("Numpad") {
        if NUMPAD_VERBATIM.contains(&code) {
            return code.to_string();
        }
        return format!("Num{rest}");
    }
    if let Some(intl) = code.strip_prefix("Intl") {
        return punctuation_token(intl).unwrap_or(intl).to_string();
    }
    if function_key_pattern().is_match(code) {
        return code.to_string();
    }
    punctuation_token(code).unwrap_or(code).to_string()
}

/// Punctuation and navigation keys with a fixed display token
fn punctuation_token(code: &str) -> Option<&'static str> {
    Some(match code {
        "Backquote" => "`",
        "Backslash" => "\\",
        "BracketLeft" => "[",
        "BracketRight" => "]",
        "Comma" => ",",
        "Equal" => "=",
        "Minus" => "-",
        "Period" => ".",
        "Quote" => "'",
        "Semicolon" => ";",
        "Slash" => "/",
        "Space" => "Space",
        "Delete" => "Delete",
        "PageDown" => "PageDown",
        "PageUp" => "PageUp",
        "ArrowUp" => "Up",
        "ArrowDown" => "Down",
        "ArrowLeft" => "Left",
        "ArrowRight" => "Right",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotkey::key_event::Modifiers;

    fn key(code: &str, key: &str, modifiers: Modifiers) -> KeyEvent {
        KeyEvent::new(code, key, modifiers)
    }

    fn ctrl() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        }
    }

    #[test]
    fn test_letter_and_digit() {
        assert_eq!(code_to_token("KeyK"), "K");
        assert_eq!(code_to_token("Digit5"), "5");
    }

    #[test]
    fn test_punctuation_table() {
        assert_eq!(code_to_token("Comma"), ",");
        assert_eq!(code_to_token("Slash"), "/");
        assert_eq!(code_to_token("Space"), "Space");
        assert_eq!(code_to_token("Backslash"), "\\");
        assert_eq!(code_to_token("Backquote"), "`");
        assert_eq!(code_to_token("ArrowUp"), "Up");
        assert_eq!(code_to_token("ArrowRight"), "Right");
        assert_eq!(code_to_token("PageDown"), "PageDown");
    }

    #[test]
    fn test_numpad() {
        assert_eq!(code_to_token("NumpadEnter"), "NumpadEnter");
        assert_eq!(code_to_token("NumpadAdd"), "NumpadAdd");
        assert_eq!(code_to_token("NumpadDecimal"), "NumpadDecimal");
        assert_eq!(code_to_token("Numpad7"), "Num7");
        assert_eq!(code_to_token("Numpad0"), "Num0");
    }

    #[test]
    fn test_intl_keys() {
        assert_eq!(code_to_token("IntlBackslash"), "\\");
        assert_eq!(code_to_token("IntlYen"), "Yen");
        assert_eq!(code_to_token("IntlRo"), "Ro");
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(code_to_token("F1"), "F1");
        assert_eq!(code_to_token("F24"), "F24");
        // Not a function key pattern, falls through to raw code
        assert_eq!(code_to_token("Fn"), "Fn");
    }

    #[test]
    fn test_unknown_code_falls_back_to_raw() {
        assert_eq!(code_to_token("Enter"), "Enter");
        assert_eq!(code_to_token("LaunchMail"), "LaunchMail");
        assert_eq!(code_to_token("🦀"), "🦀");
    }

    #[test]
    fn test_decode_is_total() {
        let codes = [
            "", "Key", "Digit", "Numpad", "Intl", "F", "F0", "KeyKeyK", "\u{0}", "+", "Unidentified",
        ];
        for code in codes {
            let decoded = decode(&key(code, "x", ctrl())).expect("not a rejected code");
            assert_eq!(decoded.modifiers, vec![Modifier::Ctrl]);
        }
    }

    #[test]
    fn test_empty_token_is_dropped() {
        let decoded = decode(&key("Key", "x", Modifiers::NONE)).unwrap();
        assert_eq!(decoded.key, None);
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_rejected_codes() {
        for code in REJECTED_CODES {
            assert!(is_rejected_code(code));
            assert_eq!(decode(&key(code, code, ctrl())), None);
        }
        assert!(!is_rejected_code("KeyA"));
    }

    #[test]
    fn test_meta_takes_precedence_over_ctrl() {
        let both = Modifiers {
            meta: true,
            ctrl: true,
            ..Modifiers::NONE
        };
        let decoded = decode(&key("KeyK", "k", both)).unwrap();
        assert_eq!(decoded.tokens(), vec!["Cmd", "K"]);
    }

    #[test]
    fn test_modifier_order() {
        let all = Modifiers {
            meta: false,
            ctrl: true,
            alt: true,
            shift: true,
        };
        let decoded = decode(&key("KeyP", "P", all)).unwrap();
        assert_eq!(decoded.tokens(), vec!["Ctrl", "Alt", "Shift", "P"]);
    }

    #[test]
    fn test_bare_modifier_produces_no_key() {
        let decoded = decode(&key("ControlLeft", "Control", ctrl())).unwrap();
        assert_eq!(decoded.tokens(), vec!["Ctrl"]);
        assert_eq!(decoded.key, None);

        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        let decoded = decode(&key("ShiftLeft", "Shift", shift)).unwrap();
        assert_eq!(decoded.tokens(), vec!["Shift"]);
    }

    #[test]
    fn test_key_without_modifiers() {
        let decoded = decode(&key("KeyK", "k", Modifiers::NONE)).unwrap();
        assert_eq!(decoded.tokens(), vec!["K"]);
    }
}
