//! Finding the runs of tokens the old and new texts have in common.

pub mod anchor;
pub mod anchor_chain;
pub mod anchor_finder;
pub mod run_length_matrix;
