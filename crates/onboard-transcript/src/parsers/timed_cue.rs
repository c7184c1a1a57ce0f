//! Timed-cue (WebVTT) parser
//!
//! Handles Teams meeting exports:
//!
//! ```text
//! WEBVTT
//!
//! 0a1b2c3d-1
//! 00:00:03.120 --> 00:00:05.480
//! <v Bustos, Luis (LDN-MOM)>Good morning everyone.</v>
//! ```

use super::{BlockAccumulator, TranscriptFormat, TranscriptParser};
use crate::types::ConversationBlock;
use once_cell::sync::Lazy;
use regex::Regex;

const HEADER: &str = "WEBVTT";

static VOICE_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<v(?:\.[\w.-]+)?\s+([^>]+)>").expect("Invalid regex"));

// Inline cue markup: <i>, <b>, <c.class>, <00:00:01.000> and their closers
static INLINE_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));

const VOICE_CLOSE: &str = "</v>";

static CUE_TIMING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(\d+):)?(\d{1,2}):(\d{1,2})(?:[.,](\d+))?\s*-->").expect("Invalid regex")
});

/// Whether the content contains at least one voice tag
pub(super) fn has_voice_tag(content: &str) -> bool {
    VOICE_OPEN_RE.is_match(content)
}

/// `(speaker, text)` pairs of one cue line.
///
/// A voice span runs until `</v>`, the next voice tag or the end of the
/// line. Inline markup inside the span is stripped.
fn voice_segments(line: &str) -> Vec<(&str, String)> {
    let opens: Vec<_> = VOICE_OPEN_RE.captures_iter(line).collect();
    opens
        .iter()
        .enumerate()
        .filter_map(|(i, caps)| {
            let tag = caps.get(0)?;
            let speaker = caps.get(1)?.as_str().trim();
            let limit = opens
                .get(i + 1)
                .and_then(|next| next.get(0))
                .map_or(line.len(), |next| next.start());
            let span = &line[tag.end()..limit];
            let span = span.find(VOICE_CLOSE).map_or(span, |close| &span[..close]);
            Some((speaker, INLINE_TAG_RE.replace_all(span, "").into_owned()))
        })
        .collect()
}

/// Cue start as seconds plus its `HH:MM:SS` display form
#[derive(Debug, Clone, PartialEq)]
struct CueStart {
    seconds: f64,
    display: String,
}

fn parse_cue_start(line: &str) -> Option<CueStart> {
    let caps = CUE_TIMING_RE.captures(line)?;
    let hours: u64 = caps.get(1).map_or(Ok(0), |m| m.as_str().parse::<u64>()).ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    let seconds: u64 = caps[3].parse().ok()?;
    let fraction: f64 = caps
        .get(4)
        .and_then(|m| format!("0.{}", m.as_str()).parse().ok())
        .unwrap_or(0.0);

    // Oversized fields make the line a non-timing line
    let whole = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    #[allow(clippy::cast_precision_loss)]
    let total = whole as f64 + fraction;

    Some(CueStart {
        seconds: total,
        display: format!("{hours:02}:{minutes:02}:{seconds:02}"),
    })
}

/// Timed-cue transcript parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TimedCueParser;

impl TimedCueParser {
    /// Create new timed-cue parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptParser for TimedCueParser {
    fn format(&self) -> TranscriptFormat {
        TranscriptFormat::TimedCue
    }

    fn parse(&self, content: &str) -> Vec<ConversationBlock> {
        let mut blocks = BlockAccumulator::new("\n");
        let mut current = CueStart {
            seconds: 0.0,
            display: String::new(),
        };

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line == HEADER || line.starts_with("WEBVTT ") {
                continue;
            }

            if let Some(start) = parse_cue_start(line) {
                current = start;
                continue;
            }

            let segments = voice_segments(line);
            if segments.is_empty() {
                tracing::trace!(line, "Skipping cue line without voice tag");
            }
            for (speaker, text) in segments {
                blocks.push(speaker, &current.display, &text, current.seconds);
            }
        }

        blocks.finish()
    }
}
