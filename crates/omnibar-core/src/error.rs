//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] omnibar_storage::StorageError),

    #[error("Suggestion error: {0}")]
    Suggest(#[from] omnibar_suggest::SuggestError),

    #[error("Input error: {0}")]
    Input(#[from] omnibar_input::InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No Tokio runtime: {0}")]
    Runtime(#[from] tokio::runtime::TryCurrentError),
}
