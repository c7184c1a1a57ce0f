//! Core transcript types

use serde::{Deserialize, Serialize};

/// A contiguous, speaker-attributed turn of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationBlock {
    /// Display name of the speaker, including any parenthetical metadata
    pub speaker: String,
    /// `HH:MM:SS` for timed sources, empty for plain text. Follows
    /// `start_time` when an out-of-order cue is clamped
    pub timestamp: String,
    /// Accumulated text of the turn
    pub message: String,
    /// Offset in seconds from the transcript origin
    pub start_time: f64,
}

impl ConversationBlock {
    /// Create a new block
    #[inline]
    #[must_use]
    pub fn new(
        speaker: impl Into<String>,
        timestamp: impl Into<String>,
        message: impl Into<String>,
        start_time: f64,
    ) -> Self {
        Self {
            speaker: speaker.into(),
            timestamp: timestamp.into(),
            message: message.into(),
            start_time,
        }
    }

    /// Number of whitespace-separated words in the message
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.message.split_whitespace().count()
    }
}

/// A search hit inside a block's message.
///
/// Offsets are counted in `char`s, not bytes, so they line up with what a
/// viewer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// Index into the block sequence
    pub block_index: usize,
    /// Offset of the match start within the block's message
    pub char_index: usize,
    /// Length of the matched span
    pub length: usize,
    /// The matched text, in source casing
    pub text: String,
}

impl Match {
    /// Char offset one past the end of the match
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.char_index + self.length
    }
}
