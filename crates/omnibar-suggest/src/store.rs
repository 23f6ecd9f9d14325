//! Candidate stores
//!
//! The address bar only reads entries; who writes them (page loads, the
//! bookmark UI, sync) is none of its business.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::bookmarks::BookmarkManager;
use crate::entry::Entry;
use crate::history::HistoryManager;
use crate::Result;
use omnibar_storage::Database;

/// Read-only source of history/bookmark entries.
///
/// `query` may block (disk, network); callers run it off the input thread.
/// Results come most recent first and may be the whole set or any superset
/// of the entries that prefix-match `prefix_hint`.
pub trait CandidateStore: Send + Sync {
    fn query(&self, prefix_hint: &str) -> Result<Vec<Entry>>;
}

/// In-process store, most recently added first.
#[derive(Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `entries`, given most recent first
    pub fn with_entries(entries: Vec<Entry>) -> Self {
        let store = Self::new();
        for entry in entries.into_iter().rev() {
            store.add_site(entry);
        }
        store
    }

    /// Add `entry` as the most recent, replacing any entry for the same location
    pub fn add_site(&self, entry: Entry) {
        let mut entries = self.entries.write();
        entries.retain(|e| e.location != entry.location);
        tracing::trace!(location = %entry.location, "Added site");
        entries.insert(0, entry);
    }

    pub fn remove_site(&self, location: &str) {
        self.entries.write().retain(|e| e.location != location);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl CandidateStore for MemoryStore {
    fn query(&self, _prefix_hint: &str) -> Result<Vec<Entry>> {
        Ok(self.entries.read().clone())
    }
}

/// History followed by bookmarks from the SQLite database.
pub struct SqliteStore {
    history: HistoryManager,
    bookmarks: BookmarkManager,
    limit: usize,
}

impl SqliteStore {
    /// Rows fetched per table and query
    pub const DEFAULT_LIMIT: usize = 200;

    pub fn new(db: Database) -> Self {
        Self {
            history: HistoryManager::new(db.clone()),
            bookmarks: BookmarkManager::new(db),
            limit: Self::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn bookmarks(&self) -> &BookmarkManager {
        &self.bookmarks
    }
}

impl CandidateStore for SqliteStore {
    fn query(&self, prefix_hint: &str) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = self
            .history
            .matching_prefix(prefix_hint, self.limit)?
            .into_iter()
            .map(Entry::from)
            .collect();

        entries.extend(
            self.bookmarks
                .matching(prefix_hint, self.limit)?
                .into_iter()
                .map(Entry::from),
        );

        Ok(entries)
    }
}
