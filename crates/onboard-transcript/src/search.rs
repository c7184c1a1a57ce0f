//! Transcript search and highlighting
//!
//! Case-insensitive substring scan over block messages. The full result set
//! is rebuilt on every call; debouncing keystrokes is the caller's job.

use crate::types::{ConversationBlock, Match};
use serde::{Deserialize, Serialize};

/// Find every non-overlapping, case-insensitive occurrence of `query`.
///
/// An empty or whitespace-only query matches nothing.
#[must_use]
pub fn find_matches(blocks: &[ConversationBlock], query: &str) -> Vec<Match> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle: Vec<char> = query.chars().collect();
    let mut matches = Vec::new();

    for (block_index, block) in blocks.iter().enumerate() {
        let haystack: Vec<char> = block.message.chars().collect();
        let mut cursor = 0;

        while cursor + needle.len() <= haystack.len() {
            let window = &haystack[cursor..cursor + needle.len()];
            if eq_ignore_case(window, &needle) {
                matches.push(Match {
                    block_index,
                    char_index: cursor,
                    length: needle.len(),
                    text: window.iter().collect(),
                });
                cursor += needle.len();
            } else {
                cursor += 1;
            }
        }
    }

    tracing::debug!(query, hits = matches.len(), "Searched transcript");
    matches
}

fn eq_ignore_case(a: &[char], b: &[char]) -> bool {
    a.iter()
        .zip(b)
        .all(|(x, y)| x == y || x.to_lowercase().eq(y.to_lowercase()))
}

/// A piece of a message, either plain or part of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Segment text
    pub text: String,
    /// Position of the match in the full result list, if this is a hit
    pub match_index: Option<usize>,
}

impl Segment {
    /// Whether this segment is a search hit
    #[inline]
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.match_index.is_some()
    }
}

/// Split one block's message into plain and highlighted segments.
///
/// `matches` is the full result of [`find_matches`]; only entries for
/// `block_index` are used. Empty segments are never emitted.
#[must_use]
pub fn highlight(message: &str, block_index: usize, matches: &[Match]) -> Vec<Segment> {
    let chars: Vec<char> = message.chars().collect();
    let mut segments = Vec::new();
    let mut cursor = 0;

    for (match_index, m) in matches
        .iter()
        .enumerate()
        .filter(|(_, m)| m.block_index == block_index)
    {
        if m.char_index < cursor || m.end() > chars.len() {
            tracing::warn!(
                block_index,
                char_index = m.char_index,
                "Match does not fit message, skipping"
            );
            continue;
        }
        if m.char_index > cursor {
            segments.push(Segment {
                text: chars[cursor..m.char_index].iter().collect(),
                match_index: None,
            });
        }
        segments.push(Segment {
            text: chars[m.char_index..m.end()].iter().collect(),
            match_index: Some(match_index),
        });
        cursor = m.end();
    }

    if cursor < chars.len() {
        segments.push(Segment {
            text: chars[cursor..].iter().collect(),
            match_index: None,
        });
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn block(message: &str) -> ConversationBlock {
        ConversationBlock::new("Ada", "", message, 0.0)
    }

    #[test]
    fn two_hits_without_overlap() {
        let blocks = vec![block("hello world hello")];
        let matches = find_matches(&blocks, "hello");
        let idx: Vec<usize> = matches.iter().map(|m| m.char_index).collect();
        assert_eq!(idx, vec![0, 12]);
        assert!(matches.iter().all(|m| m.length == 5));
    }

    #[test]
    fn empty_inputs() {
        assert!(find_matches(&[], "x").is_empty());
        assert!(find_matches(&[block("abc")], "").is_empty());
        assert!(find_matches(&[block("a b c")], "   ").is_empty());
    }

    #[test]
    fn case_insensitive_preserves_source_casing() {
        let matches = find_matches(&[block("Welcome to ONBOARDING day")], "onboarding");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "ONBOARDING");
        assert_eq!(matches[0].char_index, 11);
    }

    #[test]
    fn no_overlapping_matches() {
        let matches = find_matches(&[block("aaaa")], "aa");
        let idx: Vec<usize> = matches.iter().map(|m| m.char_index).collect();
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn scan_order_is_block_then_offset() {
        let blocks = vec![block("x.x"), block("no"), block("x")];
        let found: Vec<(usize, usize)> = find_matches(&blocks, "X")
            .iter()
            .map(|m| (m.block_index, m.char_index))
            .collect();
        assert_eq!(found, vec![(0, 0), (0, 2), (2, 0)]);
    }

    #[test]
    fn offsets_count_chars_not_bytes() {
        let matches = find_matches(&[block("café Café")], "CAFÉ");
        let idx: Vec<usize> = matches.iter().map(|m| m.char_index).collect();
        assert_eq!(idx, vec![0, 5]);
    }

    #[test]
    fn highlight_splits_message() {
        let blocks = vec![block("hello world hello")];
        let matches = find_matches(&blocks, "hello");
        let segments = highlight(&blocks[0].message, 0, &matches);
        assert_eq!(
            segments,
            vec![
                Segment {
                    text: "hello".into(),
                    match_index: Some(0),
                },
                Segment {
                    text: " world ".into(),
                    match_index: None,
                },
                Segment {
                    text: "hello".into(),
                    match_index: Some(1),
                },
            ]
        );
    }

    #[test]
    fn highlight_uses_global_match_index() {
        let blocks = vec![block("one"), block("say one")];
        let matches = find_matches(&blocks, "one");
        let segments = highlight(&blocks[1].message, 1, &matches);
        assert_eq!(segments[1].match_index, Some(1));
        assert!(!segments[0].is_match());
    }

    #[test]
    fn highlight_without_matches() {
        let segments = highlight("plain", 0, &[]);
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].is_match());
        assert!(highlight("", 0, &[]).is_empty());
    }
}
