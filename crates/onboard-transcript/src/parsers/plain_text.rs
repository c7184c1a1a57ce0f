//! Plain-text transcript parser
//!
//! One utterance per line, `Speaker: message`. The speaker label may carry
//! a parenthetical such as a department code.

use super::{BlockAccumulator, TranscriptFormat, TranscriptParser};
use crate::types::ConversationBlock;
use once_cell::sync::Lazy;
use regex::Regex;

static SPEAKER_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]+):\s*(.+)$").expect("Invalid regex"));

/// Closing voice tag left behind by copy-pasted VTT text
const CLOSING_TAG: &str = "</v>";

/// Plain-text transcript parser
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl PlainTextParser {
    /// Create new plain-text parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptParser for PlainTextParser {
    fn format(&self) -> TranscriptFormat {
        TranscriptFormat::PlainText
    }

    fn parse(&self, content: &str) -> Vec<ConversationBlock> {
        let mut blocks = BlockAccumulator::new(" ");

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(caps) = SPEAKER_LINE_RE.captures(line) else {
                tracing::trace!(line, "Dropping line without speaker delimiter");
                continue;
            };

            let speaker = caps[1].trim();
            let message = caps[2].trim_end();
            let message = message.strip_suffix(CLOSING_TAG).unwrap_or(message);

            // Synthetic clock: the ordinal of the speaker run
            #[allow(clippy::cast_precision_loss)]
            let start_time = match blocks.last() {
                Some(last) if last.speaker == speaker => last.start_time,
                _ => blocks.len() as f64,
            };

            blocks.push(speaker, "", message, start_time);
        }

        blocks.finish()
    }
}
