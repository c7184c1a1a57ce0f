//! Transcript parsers for the supported export formats
//!
//! - Timed-cue (Teams WebVTT with `<v Speaker>` voice tags)
//! - Plain text (`Speaker: message` per line)
//!
//! Format detection is global: one voice tag anywhere makes the whole
//! document timed-cue.

use crate::error::TranscriptError;
use crate::types::ConversationBlock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod accumulator;
mod plain_text;
mod timed_cue;

pub use accumulator::MERGE_WINDOW_SECS;
pub use plain_text::PlainTextParser;
pub use timed_cue::TimedCueParser;

pub(crate) use accumulator::BlockAccumulator;

/// Supported transcript formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TranscriptFormat {
    /// WebVTT cues carrying `<v Speaker>` voice tags
    TimedCue,
    /// One `Speaker: message` utterance per line
    PlainText,
}

impl TranscriptFormat {
    /// Sniff the format of raw transcript text
    #[must_use]
    pub fn detect(content: &str) -> Self {
        if timed_cue::has_voice_tag(content) {
            Self::TimedCue
        } else {
            Self::PlainText
        }
    }

    /// Canonical name of the format
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TimedCue => "timed-cue",
            Self::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for TranscriptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TranscriptFormat {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timed-cue" | "vtt" | "webvtt" => Ok(Self::TimedCue),
            "plain-text" | "plain" | "text" | "txt" => Ok(Self::PlainText),
            other => Err(TranscriptError::UnknownFormat(other.to_string())),
        }
    }
}

/// Parser trait for converting raw transcript text into blocks
///
/// Implementations are stateless; every call receives the full input.
pub trait TranscriptParser: Send + Sync {
    /// The format this parser understands
    fn format(&self) -> TranscriptFormat;

    /// Parse content into ordered conversation blocks
    fn parse(&self, content: &str) -> Vec<ConversationBlock>;

    /// Check whether this parser would be picked for the given content
    fn can_parse(&self, content: &str) -> bool {
        TranscriptFormat::detect(content) == self.format()
    }
}

/// Get the parser for a format
#[must_use]
pub fn parser_for(format: TranscriptFormat) -> &'static dyn TranscriptParser {
    match format {
        TranscriptFormat::TimedCue => &TimedCueParser,
        TranscriptFormat::PlainText => &PlainTextParser,
    }
}

/// Parse transcript text, sniffing its format
#[must_use]
pub fn parse(content: &str) -> Vec<ConversationBlock> {
    if content.trim().is_empty() {
        return Vec::new();
    }
    let format = TranscriptFormat::detect(content);
    tracing::debug!(%format, bytes = content.len(), "Detected transcript format");
    parse_as(content, format)
}

/// Parse transcript text whose format is already known
#[must_use]
pub fn parse_as(content: &str, format: TranscriptFormat) -> Vec<ConversationBlock> {
    let blocks = parser_for(format).parse(content);
    tracing::debug!(%format, blocks = blocks.len(), "Parsed transcript");
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_timed_cue() {
        let content = "WEBVTT\n\n00:00:01.000 --> 00:00:02.000\n<v Ada>Hello</v>\n";
        assert_eq!(TranscriptFormat::detect(content), TranscriptFormat::TimedCue);
    }

    #[test]
    fn detect_plain_text() {
        assert_eq!(
            TranscriptFormat::detect("Ada: Hello\nGrace: Hi"),
            TranscriptFormat::PlainText
        );
    }

    #[test]
    fn detection_is_global() {
        // A single voice tag late in the document flips the whole thing
        let content = "Ada: Hello\nGrace: Hi\n<v Grace>again</v>";
        assert_eq!(TranscriptFormat::detect(content), TranscriptFormat::TimedCue);

        let blocks = parse(content);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].speaker, "Grace");
    }

    #[test]
    fn format_from_str() {
        assert_eq!("vtt".parse::<TranscriptFormat>().unwrap(), TranscriptFormat::TimedCue);
        assert_eq!(
            "Plain-Text".parse::<TranscriptFormat>().unwrap(),
            TranscriptFormat::PlainText
        );
        assert!("srt".parse::<TranscriptFormat>().is_err());
    }

    #[test]
    fn format_display_roundtrips() {
        for format in [TranscriptFormat::TimedCue, TranscriptFormat::PlainText] {
            assert_eq!(format.to_string().parse::<TranscriptFormat>().unwrap(), format);
        }
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\t\n").is_empty());
    }

    #[test]
    fn parse_as_skips_sniffing() {
        // Plain text that happens to contain a voice tag
        let content = "Ada: see <v Bob>this</v>";
        let blocks = parse_as(content, TranscriptFormat::PlainText);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].speaker, "Ada");
    }

    #[test]
    fn parser_can_parse() {
        assert!(TimedCueParser.can_parse("<v Ada>hi</v>"));
        assert!(!TimedCueParser.can_parse("Ada: hi"));
        assert!(PlainTextParser.can_parse("Ada: hi"));
    }

    #[test]
    fn parser_for_matches_format() {
        for format in [TranscriptFormat::TimedCue, TranscriptFormat::PlainText] {
            assert_eq!(parser_for(format).format(), format);
        }
    }
}
