use thiserror::Error;

use crate::Revision;

/// Reasons for refusing to compare two revisions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The run-length matrix would be larger than the configured limit.
    #[error(
        "Comparing would need a matrix of {cells} cells, but at most {limit} cells are allowed"
    )]
    InputTooLarge {
        /// Number of old tokens times number of new tokens
        cells: usize,
        /// The configured `max_matrix_cells`
        limit: usize,
    },

    /// The revision's content is not text.
    #[error("The {revision} revision is binary data or not valid UTF-8")]
    BinaryInput {
        /// The offending revision
        revision: Revision,
    },
}
