//! Bookmarks

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::history::{prefix_patterns, timestamp, PREFIX_FILTER};
use crate::Result;
use omnibar_storage::Database;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub url: String,
    pub title: String,
}

impl From<Bookmark> for Entry {
    fn from(bookmark: Bookmark) -> Self {
        Entry::new(bookmark.url, bookmark.title)
    }
}

pub struct BookmarkManager {
    db: Database,
}

impl BookmarkManager {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Add a bookmark, or retitle the existing one for `url`
    pub fn add(&self, url: &str, title: &str) -> Result<()> {
        let now = timestamp(Utc::now());
        Ok(self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO bookmarks (url, title, created_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(url) DO UPDATE SET title = excluded.title",
                rusqlite::params![url, title, now],
            )?;
            Ok(())
        })?)
    }

    pub fn remove(&self, url: &str) -> Result<()> {
        Ok(self.db.with_connection(|conn| {
            conn.execute("DELETE FROM bookmarks WHERE url = ?1", [url])?;
            Ok(())
        })?)
    }

    /// All bookmarks, newest first
    pub fn list(&self) -> Result<Vec<Bookmark>> {
        self.select(
            "SELECT url, title FROM bookmarks ORDER BY created_at DESC, id DESC",
            [],
        )
    }

    /// Bookmarks whose url prefix-matches `hint` in some normalized form,
    /// newest first
    pub fn matching(&self, hint: &str, limit: usize) -> Result<Vec<Bookmark>> {
        let [p1, p2, p3, p4] = prefix_patterns(hint);
        self.select(
            &format!(
                "SELECT url, title FROM bookmarks
                 WHERE {PREFIX_FILTER}
                 ORDER BY created_at DESC, id DESC
                 LIMIT ?5"
            ),
            rusqlite::params![p1, p2, p3, p4, limit as i64],
        )
    }

    fn select(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<Bookmark>> {
        Ok(self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;
            let bookmarks = stmt
                .query_map(params, |row| {
                    Ok(Bookmark {
                        url: row.get(0)?,
                        title: row.get(1)?,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect();
            Ok(bookmarks)
        })?)
    }
}

impl Clone for BookmarkManager {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
