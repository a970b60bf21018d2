//! Word-granularity comparison of two revisions of a text.
//!
//! The old and new texts are split into tokens, the longest run of tokens
//! they share is anchored and further runs are searched greedily on both of
//! its sides. The gaps between the anchors become added and removed segments.
//! See [`diff`] for the entry point.

mod diff;
mod errors;
pub mod matching;
mod tokenizer;
mod utils;

pub use diff::{
    DiffOptions, DiffResult, DiffSegment, SegmentKind, Statistics, diff, diff_bytes,
    diff_with_tokenizer, merge_runs, reconstruct, try_diff,
};
pub use errors::DiffError;
pub use tokenizer::{
    BuiltinTokenizer, Tokenizer, token::Token, whitespace_tokenizer::whitespace_tokenizer,
    word_tokenizer::word_tokenizer,
};
pub use utils::revision::Revision;

#[cfg(feature = "wasm")]
pub mod wasm;
