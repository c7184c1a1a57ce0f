//! Next/previous navigation through search results

use crate::types::Match;

/// Cursor over a result list with wrap-around in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchNavigator {
    total: usize,
    current: Option<usize>,
}

impl MatchNavigator {
    /// Start at the first of `total` matches
    #[inline]
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            current: (total > 0).then_some(0),
        }
    }

    /// Reset for a fresh result list
    pub fn reset(&mut self, total: usize) {
        *self = Self::new(total);
    }

    /// Index of the focused match
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Number of matches
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Move forward, wrapping to the first match after the last
    pub fn next_match(&mut self) -> Option<usize> {
        self.current = self.current.map(|i| (i + 1) % self.total);
        self.current
    }

    /// Move backward, wrapping to the last match before the first
    pub fn previous_match(&mut self) -> Option<usize> {
        self.current = self
            .current
            .map(|i| if i == 0 { self.total - 1 } else { i - 1 });
        self.current
    }

    /// Resolve the focused match in `matches`
    #[must_use]
    pub fn focused<'a>(&self, matches: &'a [Match]) -> Option<&'a Match> {
        self.current.and_then(|i| matches.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_navigator_stays_none() {
        let mut nav = MatchNavigator::new(0);
        assert_eq!(nav.current(), None);
        assert_eq!(nav.next_match(), None);
        assert_eq!(nav.previous_match(), None);
    }

    #[test]
    fn wraps_forward() {
        let mut nav = MatchNavigator::new(3);
        assert_eq!(nav.next_match(), Some(1));
        assert_eq!(nav.next_match(), Some(2));
        assert_eq!(nav.next_match(), Some(0));
    }

    #[test]
    fn wraps_backward() {
        let mut nav = MatchNavigator::new(3);
        assert_eq!(nav.previous_match(), Some(2));
        assert_eq!(nav.previous_match(), Some(1));
    }

    #[test]
    fn reset_returns_to_first() {
        let mut nav = MatchNavigator::new(4);
        nav.next_match();
        nav.reset(2);
        assert_eq!(nav.current(), Some(0));
        assert_eq!(nav.total(), 2);
    }

    #[test]
    fn focused_resolves_match() {
        let matches = vec![
            Match {
                block_index: 0,
                char_index: 0,
                length: 1,
                text: "a".into(),
            },
            Match {
                block_index: 1,
                char_index: 3,
                length: 1,
                text: "A".into(),
            },
        ];
        let mut nav = MatchNavigator::new(matches.len());
        nav.next_match();
        assert_eq!(nav.focused(&matches).map(|m| m.block_index), Some(1));
    }
}
