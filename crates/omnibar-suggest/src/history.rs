//! History management

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::Result;
use omnibar_storage::Database;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub visited_at: DateTime<Utc>,
    pub visit_count: i32,
}

impl From<HistoryEntry> for Entry {
    fn from(entry: HistoryEntry) -> Self {
        Entry::new(entry.url, entry.title)
    }
}

pub struct HistoryManager {
    db: Database,
}

/// Fixed-width timestamps so `ORDER BY visited_at` sorts chronologically
pub(crate) fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn escape_like(hint: &str) -> String {
    let mut escaped = String::with_capacity(hint.len());
    for ch in hint.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `LIKE` pattern matching `hint` anywhere, with wildcards escaped
pub(crate) fn like_pattern(hint: &str) -> String {
    format!("%{}%", escape_like(hint))
}

/// `LIKE` patterns for urls starting with `hint` as stored, after a scheme,
/// after a leading `www.`, or after both
pub(crate) fn prefix_patterns(hint: &str) -> [String; 4] {
    let escaped = escape_like(hint);
    [
        format!("{escaped}%"),
        format!("www.{escaped}%"),
        format!("%://{escaped}%"),
        format!("%://www.{escaped}%"),
    ]
}

/// Filter matching any of `prefix_patterns` on the `url` column
pub(crate) const PREFIX_FILTER: &str = "(LOWER(url) LIKE ?1 ESCAPE '\\'
                OR LOWER(url) LIKE ?2 ESCAPE '\\'
                OR LOWER(url) LIKE ?3 ESCAPE '\\'
                OR LOWER(url) LIKE ?4 ESCAPE '\\')";

impl HistoryManager {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Record a visit to a URL
    pub fn record_visit(&self, url: &str, title: &str) -> Result<()> {
        let now = timestamp(Utc::now());
        Ok(self.db.with_connection(|conn| {
            conn.execute(
                "INSERT INTO history (url, title, visited_at, visit_count)
                 VALUES (?1, ?2, ?3, 1)
                 ON CONFLICT(url) DO UPDATE SET
                     title = CASE WHEN excluded.title != '' THEN excluded.title ELSE title END,
                     visited_at = excluded.visited_at,
                     visit_count = visit_count + 1",
                rusqlite::params![url, title, now],
            )?;
            Ok(())
        })?)
    }

    /// Update the stored title for a URL without incrementing visit count.
    pub fn update_title(&self, url: &str, title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Ok(());
        }

        Ok(self.db.with_connection(|conn| {
            conn.execute(
                "UPDATE history SET title = ?1 WHERE url = ?2",
                rusqlite::params![title, url],
            )?;
            Ok(())
        })?)
    }

    /// Search history by substring of url or title
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        self.select(
            "SELECT id, url, title, visited_at, visit_count FROM history
             WHERE LOWER(url) LIKE ?1 ESCAPE '\\' OR LOWER(title) LIKE ?1 ESCAPE '\\'
             ORDER BY visited_at DESC, id DESC
             LIMIT ?2",
            rusqlite::params![like_pattern(query), limit as i64],
        )
    }

    /// Entries whose url prefix-matches `hint` in some normalized form.
    ///
    /// The limit applies after filtering, so rows that merely contain the
    /// hint never push out real matches. Most recent first.
    pub fn matching_prefix(&self, hint: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        let [p1, p2, p3, p4] = prefix_patterns(hint);
        self.select(
            &format!(
                "SELECT id, url, title, visited_at, visit_count FROM history
                 WHERE {PREFIX_FILTER}
                 ORDER BY visited_at DESC, id DESC
                 LIMIT ?5"
            ),
            rusqlite::params![p1, p2, p3, p4, limit as i64],
        )
    }

    /// Get recent history entries
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        self.select(
            "SELECT id, url, title, visited_at, visit_count FROM history
             ORDER BY visited_at DESC, id DESC
             LIMIT ?1",
            rusqlite::params![limit as i64],
        )
    }

    /// Delete a history entry
    pub fn delete(&self, id: i64) -> Result<()> {
        Ok(self.db.with_connection(|conn| {
            conn.execute("DELETE FROM history WHERE id = ?1", [id])?;
            Ok(())
        })?)
    }

    /// Clear all history
    pub fn clear_all(&self) -> Result<()> {
        Ok(self.db.with_connection(|conn| {
            conn.execute("DELETE FROM history", [])?;
            Ok(())
        })?)
    }

    fn select(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<HistoryEntry>> {
        Ok(self.db.with_connection(|conn| {
            let mut stmt = conn.prepare(sql)?;

            let entries: Vec<HistoryEntry> = stmt
                .query_map(params, |row| {
                    let visited_str: String = row.get(3)?;
                    let visited_at = DateTime::parse_from_rfc3339(&visited_str)
                        .map(|dt| dt.with_timezone(&Utc))
                        .unwrap_or_else(|_| Utc::now());

                    Ok(HistoryEntry {
                        id: row.get(0)?,
                        url: row.get(1)?,
                        title: row.get(2)?,
                        visited_at,
                        visit_count: row.get(4)?,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect();

            Ok(entries)
        })?)
    }
}

impl Clone for HistoryManager {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}
