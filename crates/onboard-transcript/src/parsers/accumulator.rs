//! Speaker-run merging shared by both parsers

use crate::types::ConversationBlock;

/// Maximum gap between a block's start and a new segment of the same
/// speaker for the segment to be folded into that block.
pub const MERGE_WINDOW_SECS: f64 = 5.0;

/// Collects segments into blocks.
///
/// One rule for every format: a segment joins the previous block when the
/// speaker label is identical and it starts less than [`MERGE_WINDOW_SECS`]
/// after that block. Formats without a clock give every line of a speaker
/// run the same synthetic time, which reduces the rule to adjacency.
#[derive(Debug)]
pub(crate) struct BlockAccumulator {
    blocks: Vec<ConversationBlock>,
    separator: &'static str,
}

impl BlockAccumulator {
    pub(crate) fn new(separator: &'static str) -> Self {
        Self {
            blocks: Vec::new(),
            separator,
        }
    }

    pub(crate) fn last(&self) -> Option<&ConversationBlock> {
        self.blocks.last()
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Add one segment, merging or opening a block
    pub(crate) fn push(&mut self, speaker: &str, timestamp: &str, text: &str, start_time: f64) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        let mut start_time = start_time;
        let mut timestamp = timestamp;
        if let Some(last) = self.blocks.last_mut() {
            if start_time < last.start_time {
                tracing::debug!(
                    start_time,
                    previous = last.start_time,
                    "Segment starts before previous block, clamping"
                );
                start_time = last.start_time;
                timestamp = &last.timestamp;
            }

            if last.speaker == speaker && start_time - last.start_time < MERGE_WINDOW_SECS {
                last.message.push_str(self.separator);
                last.message.push_str(text);
                return;
            }
        }

        let block = ConversationBlock::new(speaker, timestamp, text, start_time);
        self.blocks.push(block);
    }

    pub(crate) fn finish(self) -> Vec<ConversationBlock> {
        self.blocks
    }
}
