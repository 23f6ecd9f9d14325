//! Input error types
//!
//! These are contract violations by a caller or collaborator, never user
//! input conditions.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Selection {start}..{end} out of bounds for text of length {len}")]
    SelectionOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Malformed candidate {matched:?} for query {query:?}")]
    MalformedCandidate { query: String, matched: String },
}
