//! Per-speaker summary of a parsed transcript

use crate::types::ConversationBlock;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Contribution of one speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerStats {
    /// Speaker label as it appears in the blocks
    pub speaker: String,
    /// Number of blocks attributed to the speaker
    pub blocks: usize,
    /// Words spoken across those blocks
    pub words: usize,
}

/// Transcript-level summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptStats {
    /// Total blocks
    pub block_count: usize,
    /// Speakers in order of first appearance
    pub speakers: Vec<SpeakerStats>,
    /// Span between the first and last block start
    pub duration_secs: f64,
}

impl TranscriptStats {
    /// Summarise a block sequence
    #[must_use]
    pub fn compute(blocks: &[ConversationBlock]) -> Self {
        let mut by_speaker: IndexMap<&str, (usize, usize)> = IndexMap::new();
        for block in blocks {
            let entry = by_speaker.entry(block.speaker.as_str()).or_default();
            entry.0 += 1;
            entry.1 += block.word_count();
        }

        let duration_secs = match (blocks.first(), blocks.last()) {
            (Some(first), Some(last)) => last.start_time - first.start_time,
            _ => 0.0,
        };

        Self {
            block_count: blocks.len(),
            speakers: by_speaker
                .into_iter()
                .map(|(speaker, (blocks, words))| SpeakerStats {
                    speaker: speaker.to_string(),
                    blocks,
                    words,
                })
                .collect(),
            duration_secs,
        }
    }

    /// Number of distinct speakers
    #[inline]
    #[must_use]
    pub fn speaker_count(&self) -> usize {
        self.speakers.len()
    }
}
