//! Onboard Transcript
//!
//! Turns meeting transcripts into speaker-attributed blocks and searches
//! them for the meeting-notes viewer.
//!
//! # Core Operations
//!
//! - **Parse**: raw Teams VTT or `Speaker: message` text → [`ConversationBlock`]s
//! - **Search**: case-insensitive, non-overlapping [`Match`]es over blocks
//! - **Highlight**: split a message into plain and matched [`Segment`]s
//!
//! # Architecture
//!
//! ```text
//! raw text → TranscriptFormat::detect → TimedCueParser | PlainTextParser
//!                                              ↓
//!                                     BlockAccumulator (speaker-run merge)
//!                                              ↓
//!                              Vec<ConversationBlock> → find_matches → Vec<Match>
//! ```
//!
//! # Example
//!
//! ```rust
//! use onboard_transcript::{find_matches, parse};
//!
//! let blocks = parse("Ada: hello world\nGrace: hello again");
//! let matches = find_matches(&blocks, "HELLO");
//! assert_eq!(matches.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod navigation;
pub mod parsers;
pub mod search;
pub mod stats;
pub mod types;

use std::path::Path;

// Re-exports for convenience
pub use error::{TranscriptError, TranscriptResult};
pub use navigation::MatchNavigator;
pub use parsers::{
    parse, parse_as, parser_for, PlainTextParser, TimedCueParser, TranscriptFormat,
    TranscriptParser, MERGE_WINDOW_SECS,
};
pub use search::{find_matches, highlight, Segment};
pub use stats::{SpeakerStats, TranscriptStats};
pub use types::{ConversationBlock, Match};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Read a transcript file and parse it.
///
/// With `format` set, sniffing is skipped.
///
/// # Errors
/// Returns [`TranscriptError::Io`] if the file cannot be read.
pub fn read_transcript(
    path: impl AsRef<Path>,
    format: Option<TranscriptFormat>,
) -> TranscriptResult<Vec<ConversationBlock>> {
    let path = path.as_ref();
    let content =
        std::fs::read_to_string(path).map_err(|e| TranscriptError::io_error(path, e))?;
    tracing::info!("Loaded transcript {}", path.display());

    Ok(match format {
        Some(format) => parse_as(&content, format),
        None => parse(&content),
    })
}

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with transcripts
    pub use crate::navigation::MatchNavigator;
    pub use crate::parsers::{parse, parse_as, TranscriptFormat, TranscriptParser};
    pub use crate::search::{find_matches, highlight};
    pub use crate::types::{ConversationBlock, Match};
}
