use std::ops::Range;

use super::run_length_matrix::Peak;

/// A contiguous run of tokens that is identical in both texts:
/// `old[old_range] == new[new_range]` token for token.
///
/// Both ranges are half-open and always have the same, non-zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    old_range: Range<usize>,
    new_range: Range<usize>,
}

impl Anchor {
    /// Back-traces the run whose last cell is `peak`: the anchor covers the
    /// `peak.length` diagonal cells ending at `(peak.row, peak.col)`.
    #[must_use]
    pub fn ending_at(peak: Peak) -> Self {
        debug_assert!(peak.length > 0, "Only positive runs can be traced");
        debug_assert!(
            peak.length <= peak.row + 1 && peak.length <= peak.col + 1,
            "A run can't start before the first token"
        );

        Self {
            old_range: peak.row + 1 - peak.length..peak.row + 1,
            new_range: peak.col + 1 - peak.length..peak.col + 1,
        }
    }

    /// Keeps the part of the anchor whose old indices fall in `old_bounds`
    /// and whose new indices fall in `new_bounds`. Returns `None` if no token
    /// of the run is left.
    #[must_use]
    pub fn clip(&self, old_bounds: Range<usize>, new_bounds: Range<usize>) -> Option<Self> {
        let old_start = self.old_range.start;
        let new_start = self.new_range.start;

        let skip = old_bounds
            .start
            .saturating_sub(old_start)
            .max(new_bounds.start.saturating_sub(new_start));
        let keep = self
            .len()
            .min(old_bounds.end.saturating_sub(old_start))
            .min(new_bounds.end.saturating_sub(new_start));

        if skip >= keep {
            return None;
        }

        Some(Self {
            old_range: old_start + skip..old_start + keep,
            new_range: new_start + skip..new_start + keep,
        })
    }

    #[must_use]
    pub fn old_range(&self) -> Range<usize> { self.old_range.clone() }

    #[must_use]
    pub fn new_range(&self) -> Range<usize> { self.new_range.clone() }

    /// Number of matching tokens in the run.
    #[must_use]
    pub fn len(&self) -> usize { self.new_range.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.new_range.is_empty() }

    /// Pairs of `(new_index, old_index)` of the matching tokens in ascending
    /// order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> {
        self.new_range.clone().zip(self.old_range.clone())
    }
}
