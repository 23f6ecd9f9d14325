//! Suggestion error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("Storage error: {0}")]
    Storage(#[from] omnibar_storage::StorageError),

    #[error("Duplicate search shortcut: {0}")]
    DuplicateShortcut(String),

    #[error("Invalid search shortcut: {0:?}")]
    InvalidShortcut(String),

    #[error("Search provider {name} has no %s placeholder in {template}")]
    InvalidTemplate { name: String, template: String },

    #[error("Candidate store unavailable: {0}")]
    Unavailable(String),
}
