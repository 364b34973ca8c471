//! Selected-text store for the translate panel
//!
//! The last text the user selected inside a chat message, together with the
//! message it came from. It stays until a new non-empty selection replaces it,
//! no matter which message panel had focus last. Views share one store by
//! cloning the handle.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A selection and its source message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Trimmed selected text
    pub text: String,
    /// Full content of the message the text was selected in
    pub raw: String,
    pub selected_at: DateTime<Utc>,
}

/// Shared handle to the current selection
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    current: Arc<RwLock<Option<Selection>>>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection made inside `raw`
    ///
    /// Whitespace-only selections are ignored and leave the previous one in
    /// place. Returns whether the store changed.
    pub fn select(&self, text: &str, raw: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        tracing::debug!("Selected {} chars", text.chars().count());
        *self.current.write() = Some(Selection {
            text: text.to_string(),
            raw: raw.to_string(),
            selected_at: Utc::now(),
        });
        true
    }

    pub fn get(&self) -> Option<Selection> {
        self.current.read().clone()
    }

    pub fn text(&self) -> Option<String> {
        self.current.read().as_ref().map(|s| s.text.clone())
    }

    pub fn clear(&self) {
        *self.current.write() = None;
    }

    /// Prompt for asking about the selection: the selected text, a newline,
    /// then the user's question
    pub fn follow_up_prompt(&self, question: &str) -> Option<String> {
        self.current
            .read()
            .as_ref()
            .map(|s| format!("{}\n{}", s.text, question))
    }
}
