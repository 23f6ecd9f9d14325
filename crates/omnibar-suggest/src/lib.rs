//! Omnibar suggestion sources
//!
//! Everything the address bar needs to turn a typed query into candidates:
//! - `CandidateStore`: read access to history and bookmark entries
//! - `MatchRanker`: scheme/`www.`-agnostic prefix matching and ordering
//! - `ProviderRegistry` + `keyword::resolve`: search shortcuts like `:g rust`

mod bookmarks;
mod entry;
mod error;
mod history;
pub mod keyword;
mod provider;
mod ranker;
mod store;

pub use bookmarks::{Bookmark, BookmarkManager};
pub use entry::{Candidate, CandidateKind, Entry};
pub use error::SuggestError;
pub use history::{HistoryEntry, HistoryManager};
pub use keyword::KeywordMatch;
pub use provider::{ProviderRegistry, SearchProvider, QUERY_PLACEHOLDER};
pub use ranker::{normalized_forms, MatchRanker};
pub use store::{CandidateStore, MemoryStore, SqliteStore};

pub type Result<T> = std::result::Result<T, SuggestError>;
