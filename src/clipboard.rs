//! Clipboard integration
//!
//! Copy buttons in the bubble and translate views write through a
//! [`ClipboardWriter`] and show a check mark for a short while afterwards.

use std::time::{Duration, Instant};
use tracing::{debug, error};

/// How long the "copied" check mark stays visible
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(2000);

/// Clipboard failure
#[derive(Debug, thiserror::Error)]
#[error("Failed to copy text: {0}")]
pub struct ClipboardError(pub String);

/// Writes plain text to the system clipboard
pub trait ClipboardWriter {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError(e.to_string()))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError(e.to_string()))?;
        debug!("Copied {} chars to clipboard", text.chars().count());
        Ok(())
    }
}

/// State behind a copy button
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text` and start the feedback window
    ///
    /// Empty text does nothing. A newer copy restarts the window.
    pub fn copy(&mut self, writer: &mut dyn ClipboardWriter, text: &str) -> Result<(), ClipboardError> {
        self.copy_at(writer, text, Instant::now())
    }

    pub fn copy_at(
        &mut self,
        writer: &mut dyn ClipboardWriter,
        text: &str,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Ok(());
        }
        if let Err(e) = writer.copy(text) {
            error!("{}", e);
            return Err(e);
        }
        self.copied_at = Some(now);
        Ok(())
    }

    /// Whether to show the check mark
    pub fn is_copied(&self) -> bool {
        self.is_copied_at(Instant::now())
    }

    pub fn is_copied_at(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_FEEDBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Vec<String>,
        fail: bool,
    }

    impl ClipboardWriter for MemoryClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError("denied".to_string()));
            }
            self.contents.push(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_shows_feedback_then_expires() {
        let mut clipboard = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();

        feedback.copy_at(&mut clipboard, "hello", start).unwrap();
        assert_eq!(clipboard.contents, vec!["hello"]);
        assert!(feedback.is_copied_at(start + Duration::from_millis(1999)));
        assert!(!feedback.is_copied_at(start + COPIED_FEEDBACK));
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let mut clipboard = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new();
        let start = Instant::now();

        feedback.copy_at(&mut clipboard, "one", start).unwrap();
        let later = start + Duration::from_millis(1500);
        feedback.copy_at(&mut clipboard, "two", later).unwrap();
        assert!(feedback.is_copied_at(start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_empty_text_is_ignored() {
        let mut clipboard = MemoryClipboard::default();
        let mut feedback = CopyFeedback::new();
        feedback.copy(&mut clipboard, "").unwrap();
        assert!(clipboard.contents.is_empty());
        assert!(!feedback.is_copied());
    }

    #[test]
    fn test_failed_copy_shows_no_feedback() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        };
        let mut feedback = CopyFeedback::new();
        assert!(feedback.copy(&mut clipboard, "text").is_err());
        assert!(!feedback.is_copied());
    }
}
