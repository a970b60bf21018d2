use super::segment::DiffSegment;
use crate::{Token, matching::anchor_chain::AnchorChain};

/// Turns an anchor chain into a flat edit script of single-token segments.
///
/// Without any anchor every old token is removed and then every new token is
/// added. Otherwise the chain is walked in ascending order and before each
/// anchored token the skipped new tokens are emitted as added, followed by
/// the skipped old tokens as removed. Tokens after the last anchor are
/// flushed the same way. Additions therefore always precede removals within
/// a gap, including the leading one.
///
/// Concatenating the unchanged and removed tokens reproduces `old`,
/// concatenating the unchanged and added tokens reproduces `new`.
#[must_use]
pub fn reconstruct(chain: &AnchorChain, old: &[Token<'_>], new: &[Token<'_>]) -> Vec<DiffSegment> {
    let mut result = Vec::with_capacity(old.len().max(new.len()));

    if chain.is_empty() {
        result.extend(old.iter().map(|token| DiffSegment::removed(token.text())));
        result.extend(new.iter().map(|token| DiffSegment::added(token.text())));
        return result;
    }

    // Number of new and old tokens emitted so far.
    let mut seen_new = 0;
    let mut seen_old = 0;

    for (new_index, old_index) in chain.iter() {
        debug_assert!(
            new_index >= seen_new && old_index >= seen_old,
            "Anchors must be strictly increasing"
        );
        debug_assert_eq!(
            old[old_index], new[new_index],
            "Anchored tokens must be equal"
        );

        emit_gap(&mut result, &old[seen_old..old_index], &new[seen_new..new_index]);
        result.push(DiffSegment::unchanged(new[new_index].text()));

        seen_new = new_index + 1;
        seen_old = old_index + 1;
    }

    emit_gap(&mut result, &old[seen_old..], &new[seen_new..]);

    result
}

fn emit_gap(result: &mut Vec<DiffSegment>, removed: &[Token<'_>], added: &[Token<'_>]) {
    result.extend(added.iter().map(|token| DiffSegment::added(token.text())));
    result.extend(removed.iter().map(|token| DiffSegment::removed(token.text())));
}
