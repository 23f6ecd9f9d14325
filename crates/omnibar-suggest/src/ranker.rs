//! Prefix ranking of store entries against a typed query
//!
//! A location is tried in three forms, in order:
//! 1. as stored (`https://www.youtube.com`)
//! 2. without its scheme (`www.youtube.com`)
//! 3. without scheme and leading `www.` (`youtube.com`)
//!
//! The first form that starts with the query (case-insensitively) is the
//! candidate's matched text. Shorter matched forms rank first; ties keep the
//! store's most-recent-first order.

use std::collections::HashSet;

use crate::entry::{Candidate, CandidateKind, Entry};

pub struct MatchRanker {
    limit: Option<usize>,
}

impl MatchRanker {
    pub fn new() -> Self {
        Self { limit: None }
    }

    /// Ranker that keeps at most `limit` candidates
    pub fn with_limit(limit: usize) -> Self {
        Self { limit: Some(limit) }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Rank `entries` (most recent first) against `query`.
    pub fn rank(&self, query: &str, entries: &[Entry]) -> Vec<Candidate> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let query_chars = query.chars().count() as f64;
        let mut seen = HashSet::new();

        let mut candidates: Vec<Candidate> = entries
            .iter()
            .filter_map(|entry| {
                let matched = normalized_forms(&entry.location)
                    .into_iter()
                    .find(|form| form.to_lowercase().starts_with(&needle))?;

                // Same url from history and bookmarks, or http/https twins
                if !seen.insert(matched.to_lowercase()) {
                    return None;
                }

                let score = query_chars / matched.chars().count() as f64;
                Some(Candidate {
                    entry: entry.clone(),
                    matched_text: matched.to_string(),
                    score,
                    kind: CandidateKind::History,
                })
            })
            .collect();

        // Stable: equal lengths keep recency order
        candidates.sort_by_key(|c| c.matched_text.chars().count());

        if let Some(limit) = self.limit {
            candidates.truncate(limit);
        }

        candidates
    }
}

impl Default for MatchRanker {
    fn default() -> Self {
        Self::new()
    }
}

/// The forms of `location` tried for a prefix match, most literal first.
pub fn normalized_forms(location: &str) -> Vec<&str> {
    let mut forms = vec![location];

    let without_scheme = strip_scheme(location);
    if without_scheme.len() != location.len() {
        forms.push(without_scheme);
    }

    let without_www = strip_www(without_scheme);
    if without_www.len() != without_scheme.len() {
        forms.push(without_www);
    }

    forms
}

fn strip_scheme(location: &str) -> &str {
    let Some(idx) = location.find("://") else {
        return location;
    };

    let scheme = &location[..idx];
    let valid = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));

    if valid {
        &location[idx + 3..]
    } else {
        location
    }
}

fn strip_www(location: &str) -> &str {
    match location.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &location[4..],
        _ => location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<Entry> {
        vec![
            Entry::location("https://www.youtube.com"),
            Entry::location("https://brave.com/test"),
            Entry::new("https://brave.com", "Brave"),
        ]
    }

    fn matched(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.matched_text.as_str()).collect()
    }

    #[test]
    fn test_normalized_forms() {
        assert_eq!(
            normalized_forms("https://www.youtube.com"),
            vec!["https://www.youtube.com", "www.youtube.com", "youtube.com"]
        );
        assert_eq!(normalized_forms("brave.com"), vec!["brave.com"]);
        assert_eq!(
            normalized_forms("www.example.org"),
            vec!["www.example.org", "example.org"]
        );
        // Not a scheme: spaces are not allowed in one
        assert_eq!(normalized_forms("a b://c"), vec!["a b://c"]);
    }

    #[test]
    fn test_scheme_stripped_and_shorter_first() {
        let ranked = MatchRanker::new().rank("br", &history());
        assert_eq!(matched(&ranked), vec!["brave.com", "brave.com/test"]);
        assert_eq!(ranked[0].entry.title, "Brave");
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_scheme_kept_when_typed() {
        let ranked = MatchRanker::new().rank("https://br", &history());
        assert_eq!(
            matched(&ranked),
            vec!["https://brave.com", "https://brave.com/test"]
        );
    }

    #[test]
    fn test_www_stripped() {
        let ranked = MatchRanker::new().rank("you", &history());
        assert_eq!(matched(&ranked), vec!["youtube.com"]);

        let ranked = MatchRanker::new().rank("www.y", &history());
        assert_eq!(matched(&ranked), vec!["www.youtube.com"]);
    }

    #[test]
    fn test_case_insensitive() {
        let ranked = MatchRanker::new().rank("BR", &history());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].matched_text, "brave.com");
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(MatchRanker::new().rank("zzz", &history()).is_empty());
        assert!(MatchRanker::new().rank("", &history()).is_empty());
        assert!(MatchRanker::new().rank("br", &[]).is_empty());
    }

    #[test]
    fn test_ties_keep_store_order() {
        let entries = vec![
            Entry::location("https://beta.io"),
            Entry::location("https://best.io"),
        ];
        let ranked = MatchRanker::new().rank("be", &entries);
        assert_eq!(matched(&ranked), vec!["beta.io", "best.io"]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let entries = vec![
            Entry::location("https://brave.com"),
            Entry::location("http://brave.com"),
            Entry::new("https://brave.com", "Bookmark"),
        ];
        let ranked = MatchRanker::new().rank("bra", &entries);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].entry.location, "https://brave.com");
    }

    #[test]
    fn test_limit() {
        let entries: Vec<Entry> = (0..20)
            .map(|i| Entry::location(format!("https://site{i}.com")))
            .collect();
        let ranked = MatchRanker::with_limit(5).rank("site", &entries);
        assert_eq!(ranked.len(), 5);
    }
}
