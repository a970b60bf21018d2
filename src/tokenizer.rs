use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;
use token::Token;

pub mod token;
pub mod whitespace_tokenizer;
pub mod word_tokenizer;

/// A tokenizer takes a string and returns the ordered list of tokens the
/// texts are compared by.
pub type Tokenizer = dyn for<'a> Fn(&'a str) -> Vec<Token<'a>>;

/// The tokenizers shipped with the crate.
///
/// Dereferences to the tokenizer function itself, so `&*BuiltinTokenizer::Word`
/// can be passed wherever a `&Tokenizer` is expected.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinTokenizer {
    /// Split on every single space and newline, keeping empty tokens.
    Whitespace,

    /// Split on runs of Unicode whitespace, dropping empty tokens.
    Word,
}

impl Default for BuiltinTokenizer {
    fn default() -> Self { BuiltinTokenizer::Whitespace }
}

impl Deref for BuiltinTokenizer {
    type Target = Tokenizer;

    fn deref(&self) -> &Self::Target {
        match self {
            BuiltinTokenizer::Whitespace => &whitespace_tokenizer::whitespace_tokenizer,
            BuiltinTokenizer::Word => &word_tokenizer::word_tokenizer,
        }
    }
}
