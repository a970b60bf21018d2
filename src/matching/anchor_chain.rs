use std::collections::BTreeMap;

use super::{anchor::Anchor, anchor_finder::FoundAnchors};

/// Monotonic correspondence between new and old token positions, derived
/// from all anchors of a comparison.
///
/// Keys are new indices, values old indices. Both strictly increase when
/// iterated in key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnchorChain {
    new_to_old: BTreeMap<usize, usize>,
}

impl AnchorChain {
    /// Number of anchored token pairs.
    #[must_use]
    pub fn len(&self) -> usize { self.new_to_old.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.new_to_old.is_empty() }

    /// Old index matched to the token at `new_index`, if it is anchored.
    #[must_use]
    pub fn old_index(&self, new_index: usize) -> Option<usize> {
        self.new_to_old.get(&new_index).copied()
    }

    /// `(new_index, old_index)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.new_to_old.iter().map(|(&new, &old)| (new, old))
    }

    fn is_monotonic(&self) -> bool {
        self.iter()
            .zip(self.iter().skip(1))
            .all(|((_, old), (_, next_old))| old < next_old)
    }
}

impl From<&FoundAnchors> for AnchorChain {
    fn from(anchors: &FoundAnchors) -> Self {
        let mut new_to_old = BTreeMap::new();

        // Anchors never overlap, but if they did the earlier one would win.
        for (new, old) in anchors.iter().flat_map(Anchor::pairs) {
            new_to_old.entry(new).or_insert(old);
        }

        let chain = AnchorChain { new_to_old };
        debug_assert!(chain.is_monotonic(), "Anchors must not cross each other");

        chain
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        matching::{anchor_finder::find_anchors, run_length_matrix::RunLengthMatrix},
        tokenizer::whitespace_tokenizer::whitespace_tokenizer,
    };

    fn chain(old: &str, new: &str) -> AnchorChain {
        let matrix = RunLengthMatrix::build(&whitespace_tokenizer(old), &whitespace_tokenizer(new));

        find_anchors(&matrix)
            .as_ref()
            .map(AnchorChain::from)
            .unwrap_or_default()
    }

    #[test]
    fn test_chain_is_sorted_by_new_index() {
        let chain = chain(
            "the quick brown fox jumps over the lazy dog",
            "the quick red fox leaps over the lazy cat",
        );

        assert_eq!(
            chain.iter().collect::<Vec<_>>(),
            vec![(0, 0), (1, 1), (3, 3), (5, 5), (6, 6), (7, 7)]
        );
        assert_eq!(chain.len(), 6);
        assert_eq!(chain.old_index(3), Some(3));
        assert_eq!(chain.old_index(2), None);
    }

    #[test]
    fn test_chain_maps_shifted_positions() {
        let chain = chain("x a b", "a b y");

        assert_eq!(chain.iter().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn test_empty_chain_without_common_tokens() {
        assert!(chain("a b", "c d").is_empty());
    }
}
