#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::Token;

/// Summary of the two compared revisions. Computed from the raw texts and
/// their tokens only, independently of the matching.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    /// Length of the old text in bytes.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = oldCharCount))]
    pub old_char_count: usize,

    /// Number of tokens of the old text.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = oldWordCount))]
    pub old_word_count: usize,

    /// Length of the new text in bytes.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = newCharCount))]
    pub new_char_count: usize,

    /// Number of tokens of the new text.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = newWordCount))]
    pub new_word_count: usize,

    /// Whether the new text is strictly longer than the old one in bytes.
    #[cfg_attr(feature = "wasm", wasm_bindgen(js_name = newTextLonger))]
    pub new_text_longer: bool,
}

impl Statistics {
    #[must_use]
    pub fn new(old: &str, old_tokens: &[Token<'_>], new: &str, new_tokens: &[Token<'_>]) -> Self {
        let old_char_count = old.len();
        let new_char_count = new.len();

        Self {
            old_char_count,
            old_word_count: old_tokens.len(),
            new_char_count,
            new_word_count: new_tokens.len(),
            new_text_longer: new_char_count > old_char_count,
        }
    }
}
