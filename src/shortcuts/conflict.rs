//! Shortcut conflict handling
//!
//! When the host cannot bind a combo (another app owns it, the OS reserves
//! it), offer nearby alternatives the user can pick instead.

use crate::hotkey::Hotkey;
use serde::{Deserialize, Serialize};

/// Maximum number of alternatives offered
const MAX_SUGGESTIONS: usize = 5;

/// A combo the host refused to bind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConflict {
    /// The hotkey that failed to register
    pub shortcut: String,
    /// Name of the shortcut slot (e.g. "okey_ai")
    pub name: String,
    /// Human-readable reason
    pub reason: String,
    /// Valid alternatives, most similar first
    pub suggestions: Vec<String>,
}

impl std::fmt::Display for ShortcutConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to register shortcut '{}': {}", self.shortcut, self.reason)
    }
}

/// Modifier sets tried with the original main key
const MODIFIER_COMBOS: &[&str] = &[
    "Ctrl+Shift",
    "Ctrl+Alt",
    "Alt+Shift",
    "Cmd+Shift",
    "Cmd+Alt",
    "Ctrl+Alt+Shift",
];

/// Main keys tried with the original modifiers
const BASE_KEYS: &[&str] = &["G", "T", "Y", "J", "K", "L", "Space", "/"];

/// Suggest alternatives for a hotkey that failed to register
///
/// Same key with other modifiers first, then same modifiers with other keys.
/// Every suggestion is itself a valid hotkey.
pub fn suggest_alternatives(failed: &Hotkey) -> Vec<String> {
    let failed_str = failed.to_string();
    let key = failed.key();
    let modifier_part = failed
        .modifiers()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("+");

    let same_key = MODIFIER_COMBOS.iter().map(|m| format!("{m}+{key}"));
    let same_modifiers = BASE_KEYS.iter().map(|k| format!("{modifier_part}+{k}"));

    let mut suggestions: Vec<String> = Vec::new();
    for candidate in same_key.take(3).chain(same_modifiers) {
        if candidate == failed_str || suggestions.contains(&candidate) {
            continue;
        }
        if candidate.parse::<Hotkey>().is_err() {
            continue;
        }
        suggestions.push(candidate);
        if suggestions.len() >= MAX_SUGGESTIONS {
            break;
        }
    }
    suggestions
}

/// Why a combo could not be bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// Another slot of this app already holds the combo
    InUseBySlot(String),
    /// Some other application owns it
    TakenElsewhere,
    /// The backend cannot express the combo
    Unsupported,
    /// Accessibility permission missing
    NeedsPermission,
    /// Reserved by the OS
    Reserved,
    /// Anything else, with the backend's own message
    Other(String),
}

impl ConflictReason {
    /// Map a backend error message onto a reason
    pub fn from_backend_error(message: &str) -> Self {
        let lower = message.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if mentions(&["already registered", "in use"]) {
            Self::TakenElsewhere
        } else if mentions(&["invalid", "parse", "unsupported"]) {
            Self::Unsupported
        } else if mentions(&["permission", "access"]) {
            Self::NeedsPermission
        } else if mentions(&["reserved", "system"]) {
            Self::Reserved
        } else {
            Self::Other(message.to_string())
        }
    }
}

impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InUseBySlot(slot) => {
                write!(f, "Already assigned to the '{slot}' shortcut in Okey AI.")
            }
            Self::TakenElsewhere => f.write_str("Another application already uses this shortcut."),
            Self::Unsupported => f.write_str("The system does not accept this key combination."),
            Self::NeedsPermission => {
                f.write_str("Global shortcuts need accessibility permission.")
            }
            Self::Reserved => f.write_str("The operating system reserves this shortcut."),
            Self::Other(message) => write!(f, "The system refused the shortcut: {message}"),
        }
    }
}

/// Build a conflict report for a failed registration
pub fn create_conflict(shortcut: &Hotkey, name: &str, reason: ConflictReason) -> ShortcutConflict {
    ShortcutConflict {
        shortcut: shortcut.to_string(),
        name: name.to_string(),
        reason: reason.to_string(),
        suggestions: suggest_alternatives(shortcut),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotkey(s: &str) -> Hotkey {
        s.parse().unwrap()
    }

    #[test]
    fn test_suggest_alternatives_for_modifier_combo() {
        let suggestions = suggest_alternatives(&hotkey("Ctrl+Shift+K"));
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert!(!suggestions.contains(&"Ctrl+Shift+K".to_string()));
        // Same key with different modifiers comes first
        assert_eq!(suggestions[0], "Ctrl+Alt+K");
        assert!(suggestions.contains(&"Ctrl+Shift+G".to_string()));
    }

    #[test]
    fn test_suggestions_are_valid_and_unique() {
        let suggestions = suggest_alternatives(&hotkey("Alt+Space"));
        for s in &suggestions {
            assert!(s.parse::<Hotkey>().is_ok(), "{s} is not a valid hotkey");
        }
        let mut deduped = suggestions.clone();
        deduped.dedup();
        assert_eq!(deduped, suggestions);
    }

    #[test]
    fn test_backend_errors_map_to_reasons() {
        assert_eq!(
            ConflictReason::from_backend_error("HotKey already registered: Alt+T"),
            ConflictReason::TakenElsewhere
        );
        assert_eq!(
            ConflictReason::from_backend_error("Permission denied"),
            ConflictReason::NeedsPermission
        );
        assert_eq!(
            ConflictReason::from_backend_error("Failed to parse accelerator"),
            ConflictReason::Unsupported
        );
        assert_eq!(
            ConflictReason::from_backend_error("boom"),
            ConflictReason::Other("boom".to_string())
        );
    }

    #[test]
    fn test_in_app_reason_names_the_slot() {
        let reason = ConflictReason::InUseBySlot("test".to_string()).to_string();
        assert!(reason.contains("'test'"));
        assert!(!reason.contains("application"));
    }

    #[test]
    fn test_create_conflict() {
        let conflict = create_conflict(
            &hotkey("Cmd+G"),
            "okey_ai",
            ConflictReason::TakenElsewhere,
        );
        assert_eq!(conflict.shortcut, "Cmd+G");
        assert_eq!(conflict.name, "okey_ai");
        assert_eq!(conflict.reason, "Another application already uses this shortcut.");
        assert!(!conflict.suggestions.is_empty());
        assert_eq!(
            conflict.to_string(),
            "Failed to register shortcut 'Cmd+G': Another application already uses this shortcut."
        );
    }
}
