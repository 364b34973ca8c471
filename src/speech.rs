//! Text-to-speech glue
//!
//! Speech itself is the host's job (webview speech synthesis or a native
//! engine). This module picks the language and decides when to speak.

use crate::settings::AutoSpeakState;

/// Share of CJK ideographs above which text is treated as Chinese
const CHINESE_RATIO_THRESHOLD: f64 = 0.3;

/// Speech engine failure
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech synthesis is not available")]
    Unavailable,

    #[error("Speech engine error: {0}")]
    Engine(String),
}

/// Speaks text in a given language (BCP 47 tag, e.g. "en-US")
pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str, lang: &str) -> Result<(), SpeechError>;
}

/// Guess the speech language of `text`
///
/// Returns "zh-CN" when more than 30% of the non-whitespace characters are
/// CJK unified ideographs, "en-US" otherwise, and "unknown" for blank text.
pub fn detect_language(text: &str) -> &'static str {
    let total_chars = text.chars().filter(|c| !c.is_whitespace()).count();
    if total_chars == 0 {
        return "unknown";
    }

    let chinese_chars = text
        .chars()
        .filter(|c| ('\u{4e00}'..='\u{9fff}').contains(c))
        .count();

    let chinese_ratio = chinese_chars as f64 / total_chars as f64;
    if chinese_ratio > CHINESE_RATIO_THRESHOLD {
        "zh-CN"
    } else {
        "en-US"
    }
}

/// Speak `text` in its detected language. Blank text is skipped.
pub fn speak(speaker: &dyn Speaker, text: &str) -> Result<(), SpeechError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(());
    }
    let lang = detect_language(text);
    tracing::debug!("Speaking {} chars as {}", text.chars().count(), lang);
    speaker.speak(text, lang)
}

/// Speak a fresh translation if the auto-speak mode allows it
///
/// Returns whether anything was spoken.
pub fn auto_speak(
    speaker: &dyn Speaker,
    state: AutoSpeakState,
    text: &str,
) -> Result<bool, SpeechError> {
    let word_count = text.split_whitespace().count();
    if !state.should_speak(word_count) {
        return Ok(false);
    }
    speak(speaker, text)?;
    Ok(true)
}
