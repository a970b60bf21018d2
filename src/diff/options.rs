#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::BuiltinTokenizer;

/// Configuration of a checked comparison, see [`crate::try_diff`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffOptions {
    /// How the texts are split into tokens.
    pub tokenizer: BuiltinTokenizer,

    /// Upper bound on `old tokens * new tokens`, the number of cells of the
    /// run-length matrix. The comparison is refused above it. Unbounded when
    /// `None`.
    pub max_matrix_cells: Option<usize>,
}

impl DiffOptions {
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: BuiltinTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    #[must_use]
    pub fn with_max_matrix_cells(mut self, max_matrix_cells: usize) -> Self {
        self.max_matrix_cells = Some(max_matrix_cells);
        self
    }
}
