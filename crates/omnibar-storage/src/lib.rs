//! Omnibar Storage Layer
//!
//! SQLite-backed persistence for the entries the address bar suggests from:
//! visited history, bookmarks and a small key/value settings table.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
