mod diff_result;
mod options;
mod reconstructor;
mod run_merger;
mod segment;
mod statistics;

pub use diff_result::DiffResult;
pub use options::DiffOptions;
pub use reconstructor::reconstruct;
pub use run_merger::merge_runs;
pub use segment::{DiffSegment, SegmentKind};
pub use statistics::Statistics;

use log::debug;

use crate::{
    BuiltinTokenizer, DiffError, Revision, Token, Tokenizer,
    matching::{
        anchor_chain::AnchorChain, anchor_finder::find_anchors, run_length_matrix::RunLengthMatrix,
    },
};

/// Compares two revisions of a text word by word and returns the ordered
/// unchanged, added and removed segments turning `old` into `new`.
///
/// The texts are split at every space and newline. The longest common run of
/// tokens is anchored first, further runs are then searched greedily to its
/// left and right. The result is not guaranteed to be a minimal edit script.
///
/// ```
/// use anchor_diff::{DiffSegment, diff};
///
/// let result = diff("Merging text is hard!", "Merging text is easy!");
///
/// assert_eq!(
///     result.segments(),
///     [
///         DiffSegment::unchanged("Merging text is"),
///         DiffSegment::added("easy!"),
///         DiffSegment::removed("hard!"),
///     ]
/// );
/// assert!(!result.statistics().new_text_longer);
/// ```
#[must_use]
pub fn diff(old: &str, new: &str) -> DiffResult {
    diff_with_tokenizer(old, new, &*BuiltinTokenizer::Whitespace)
}

/// Same as [`diff`] but splits the texts with `tokenizer`.
#[must_use]
pub fn diff_with_tokenizer(old: &str, new: &str, tokenizer: &Tokenizer) -> DiffResult {
    let old_tokens = tokenizer(old);
    let new_tokens = tokenizer(new);

    compare(old, &old_tokens, new, &new_tokens)
}

/// Same as [`diff`] but configured by `options`.
///
/// # Errors
///
/// Returns [`DiffError::InputTooLarge`] if the texts have more tokens than
/// `options.max_matrix_cells` allows.
pub fn try_diff(old: &str, new: &str, options: &DiffOptions) -> Result<DiffResult, DiffError> {
    let tokenizer: &Tokenizer = &*options.tokenizer;
    let old_tokens = tokenizer(old);
    let new_tokens = tokenizer(new);

    if let Some(limit) = options.max_matrix_cells {
        let cells = old_tokens.len().saturating_mul(new_tokens.len());
        if cells > limit {
            debug!("Refusing to build a matrix of {cells} cells, the limit is {limit}");
            return Err(DiffError::InputTooLarge { cells, limit });
        }
    }

    Ok(compare(old, &old_tokens, new, &new_tokens))
}

/// Compares two revisions given as raw bytes, for example as read from
/// storage.
///
/// # Errors
///
/// Returns [`DiffError::BinaryInput`] if either revision is not UTF-8 text,
/// and [`DiffError::InputTooLarge`] under the same conditions as
/// [`try_diff`].
pub fn diff_bytes(old: &[u8], new: &[u8], options: &DiffOptions) -> Result<DiffResult, DiffError> {
    let old = revision_text(old, Revision::Old)?;
    let new = revision_text(new, Revision::New)?;

    try_diff(old, new, options)
}

/// Reads a revision's bytes as text. NUL bytes are valid UTF-8 but never
/// occur in an editable revision, so they mark it as binary as well.
fn revision_text(data: &[u8], revision: Revision) -> Result<&str, DiffError> {
    let text = std::str::from_utf8(data).map_err(|_| DiffError::BinaryInput { revision })?;

    if text.contains('\0') {
        debug!("The {revision} revision contains a NUL byte");
        return Err(DiffError::BinaryInput { revision });
    }

    Ok(text)
}

fn compare(old: &str, old_tokens: &[Token<'_>], new: &str, new_tokens: &[Token<'_>]) -> DiffResult {
    let statistics = Statistics::new(old, old_tokens, new, new_tokens);

    let matrix = RunLengthMatrix::build(old_tokens, new_tokens);
    let chain = find_anchors(&matrix)
        .as_ref()
        .map(AnchorChain::from)
        .unwrap_or_default();
    debug!(
        "Anchored {} of {} old and {} new tokens",
        chain.len(),
        old_tokens.len(),
        new_tokens.len()
    );

    let segments = merge_runs(reconstruct(&chain, old_tokens, new_tokens));

    DiffResult::new(segments, statistics, old_tokens, new_tokens)
}
