#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    segment::{DiffSegment, SegmentKind},
    statistics::Statistics,
};
use crate::Token;

/// The outcome of comparing two revisions: the merged segments in order,
/// the statistics of both texts and the tokens they were split into.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult {
    segments: Vec<DiffSegment>,
    statistics: Statistics,
    old_tokens: Vec<String>,
    new_tokens: Vec<String>,
}

impl DiffResult {
    #[must_use]
    pub fn new(
        segments: Vec<DiffSegment>,
        statistics: Statistics,
        old_tokens: &[Token<'_>],
        new_tokens: &[Token<'_>],
    ) -> Self {
        Self {
            segments,
            statistics,
            old_tokens: owned_texts(old_tokens),
            new_tokens: owned_texts(new_tokens),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[DiffSegment] { &self.segments }

    #[must_use]
    pub fn into_segments(self) -> Vec<DiffSegment> { self.segments }

    #[must_use]
    pub fn statistics(&self) -> Statistics { self.statistics }

    /// Tokens of the old text in order.
    #[must_use]
    pub fn old_tokens(&self) -> &[String] { &self.old_tokens }

    /// Tokens of the new text in order.
    #[must_use]
    pub fn new_tokens(&self) -> &[String] { &self.new_tokens }

    /// Whether anything was added or removed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.segments.iter().any(|segment| !segment.is_unchanged())
    }

    /// The old token stream rebuilt from the unchanged and removed segments,
    /// tokens joined by single spaces.
    #[must_use]
    pub fn old_text(&self) -> String { self.join_except(SegmentKind::Added) }

    /// The new token stream rebuilt from the unchanged and added segments,
    /// tokens joined by single spaces.
    #[must_use]
    pub fn new_text(&self) -> String { self.join_except(SegmentKind::Removed) }

    fn join_except(&self, skipped: SegmentKind) -> String {
        self.segments
            .iter()
            .filter(|segment| segment.kind() != skipped)
            .map(DiffSegment::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn owned_texts(tokens: &[Token<'_>]) -> Vec<String> {
    tokens.iter().map(|token| token.text().to_owned()).collect()
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a DiffSegment;
    type IntoIter = std::slice::Iter<'a, DiffSegment>;

    fn into_iter(self) -> Self::IntoIter { self.segments.iter() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn result(segments: Vec<DiffSegment>) -> DiffResult {
        DiffResult::new(segments, Statistics::default(), &[], &[])
    }

    #[test]
    fn test_round_trip_texts() {
        let result = result(vec![
            DiffSegment::added("a"),
            DiffSegment::unchanged("b c"),
            DiffSegment::removed("d"),
            DiffSegment::unchanged("e"),
        ]);

        assert_eq!(result.old_text(), "b c d e");
        assert_eq!(result.new_text(), "a b c e");
        assert!(result.has_changes());
    }

    #[test]
    fn test_without_changes() {
        let result = result(vec![DiffSegment::unchanged("a b")]);

        assert!(!result.has_changes());
        assert_eq!(result.old_text(), result.new_text());
        for segment in &result {
            assert!(segment.is_unchanged());
        }
    }
}
