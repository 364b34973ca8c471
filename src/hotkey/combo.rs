//! Canonical hotkey strings (`Ctrl+Shift+K`)
//!
//! The `+`-joined form is what the host registers and what the settings view
//! shows back to the user, so parsing a stored string must yield exactly the
//! tokens the recorder produced when it was captured.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between tokens in a hotkey string
pub const SEPARATOR: char = '+';

/// The four modifier tokens, in the order they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    Cmd,
    Ctrl,
    Alt,
    Shift,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cmd => "Cmd",
            Self::Ctrl => "Ctrl",
            Self::Alt => "Alt",
            Self::Shift => "Shift",
        }
    }

    /// Exact, case-sensitive match against a token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Cmd" => Some(Self::Cmd),
            "Ctrl" => Some(Self::Ctrl),
            "Alt" => Some(Self::Alt),
            "Shift" => Some(Self::Shift),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a token is one of `Cmd`, `Ctrl`, `Alt`, `Shift`
pub fn is_modifier_token(token: &str) -> bool {
    Modifier::from_token(token).is_some()
}

/// A combination holds at least one modifier and at least one other key
pub fn is_valid_combination<S: AsRef<str>>(tokens: &[S]) -> bool {
    let has_modifier = tokens.iter().any(|t| is_modifier_token(t.as_ref()));
    let has_key = tokens.iter().any(|t| !is_modifier_token(t.as_ref()));
    has_modifier && has_key
}

/// Split a stored hotkey string into display tokens
///
/// Tokens are trimmed; empty input yields no tokens.
pub fn split_tokens(hotkey: &str) -> Vec<String> {
    if hotkey.trim().is_empty() {
        return Vec::new();
    }
    hotkey
        .split(SEPARATOR)
        .map(|t| t.trim().to_string())
        .collect()
}

/// Errors from parsing a hotkey string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotkeyParseError {
    #[error("Hotkey string is empty")]
    Empty,

    #[error("Hotkey '{0}' contains an empty key token")]
    EmptyToken(String),

    #[error("Hotkey '{0}' has no modifier (Cmd/Ctrl/Alt/Shift)")]
    MissingModifier(String),

    #[error("Hotkey '{0}' has no main key")]
    MissingKey(String),
}

/// A validated modifier+key combination
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hotkey {
    tokens: Vec<String>,
}

impl Hotkey {
    /// Build from tokens already in canonical order
    pub fn from_tokens(tokens: Vec<String>) -> Result<Self, HotkeyParseError> {
        if tokens.is_empty() {
            return Err(HotkeyParseError::Empty);
        }
        let joined = tokens.join("+");
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(HotkeyParseError::EmptyToken(joined));
        }
        if !tokens.iter().any(|t| is_modifier_token(t)) {
            return Err(HotkeyParseError::MissingModifier(joined));
        }
        if tokens.iter().all(|t| is_modifier_token(t)) {
            return Err(HotkeyParseError::MissingKey(joined));
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn modifiers(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.tokens.iter().filter_map(|t| Modifier::from_token(t))
    }

    /// The last non-modifier token
    pub fn key(&self) -> &str {
        self.tokens
            .iter()
            .rev()
            .find(|t| !is_modifier_token(t))
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl FromStr for Hotkey {
    type Err = HotkeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = split_tokens(s);
        Self::from_tokens(tokens)
    }
}

impl TryFrom<String> for Hotkey {
    type Error = HotkeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hotkey> for String {
    fn from(hotkey: Hotkey) -> Self {
        hotkey.to_string()
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let hotkey: Hotkey = "Ctrl+Shift+K".parse().unwrap();
        assert_eq!(hotkey.tokens(), ["Ctrl", "Shift", "K"]);
        assert_eq!(hotkey.to_string(), "Ctrl+Shift+K");
        assert_eq!(hotkey.key(), "K");
        assert_eq!(
            hotkey.modifiers().collect::<Vec<_>>(),
            vec![Modifier::Ctrl, Modifier::Shift]
        );
    }

    #[test]
    fn test_parse_trims_tokens() {
        let hotkey: Hotkey = "Cmd + Up".parse().unwrap();
        assert_eq!(hotkey.to_string(), "Cmd+Up");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!("".parse::<Hotkey>(), Err(HotkeyParseError::Empty));
        assert_eq!(
            "K".parse::<Hotkey>(),
            Err(HotkeyParseError::MissingModifier("K".to_string()))
        );
        assert_eq!(
            "Ctrl+Alt".parse::<Hotkey>(),
            Err(HotkeyParseError::MissingKey("Ctrl+Alt".to_string()))
        );
        assert!(matches!(
            "Ctrl++K".parse::<Hotkey>(),
            Err(HotkeyParseError::EmptyToken(_))
        ));
    }

    #[test]
    fn test_modifier_tokens_are_case_sensitive() {
        assert!(is_modifier_token("Ctrl"));
        assert!(!is_modifier_token("ctrl"));
        assert!(!is_modifier_token("CTRL"));
    }

    #[test]
    fn test_split_tokens() {
        assert_eq!(split_tokens("Cmd+Shift+Up"), vec!["Cmd", "Shift", "Up"]);
        assert!(split_tokens("").is_empty());
        assert_eq!(split_tokens("NONE"), vec!["NONE"]);
    }

    #[test]
    fn test_is_valid_combination() {
        assert!(is_valid_combination(&["Ctrl", "K"]));
        assert!(!is_valid_combination(&["Ctrl"]));
        assert!(!is_valid_combination(&["K"]));
        assert!(!is_valid_combination::<&str>(&[]));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let hotkey: Hotkey = "Alt+F4".parse().unwrap();
        let json = serde_json::to_string(&hotkey).unwrap();
        assert_eq!(json, "\"Alt+F4\"");
        let back: Hotkey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hotkey);
        assert!(serde_json::from_str::<Hotkey>("\"F4\"").is_err());
    }
}
