//! Search shortcut detection
//!
//! `:g rust traits` → Google, query `rust traits`. The shortcut must open the
//! input and be followed by exactly one space; anything else falls through to
//! history matching.

use crate::entry::{Candidate, CandidateKind, Entry};
use crate::provider::SearchProvider;

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatch {
    pub provider: SearchProvider,
    /// Text after the shortcut and its separator
    pub remainder: String,
}

impl KeywordMatch {
    pub fn query_url(&self) -> String {
        self.provider.query_url(&self.remainder)
    }

    /// Candidate row for this match; displays the text as typed
    pub fn candidate(&self, raw_text: &str) -> Candidate {
        Candidate {
            entry: Entry::new(self.query_url(), self.provider.name.clone()),
            matched_text: raw_text.to_string(),
            score: 1.0,
            kind: CandidateKind::Provider,
        }
    }
}

/// Find the provider whose shortcut opens `raw_text`.
pub fn resolve(raw_text: &str, providers: &[SearchProvider]) -> Option<KeywordMatch> {
    providers.iter().find_map(|provider| {
        let remainder = raw_text
            .strip_prefix(provider.shortcut.as_str())?
            .strip_prefix(' ')?;

        Some(KeywordMatch {
            provider: provider.clone(),
            remainder: remainder.to_string(),
        })
    })
}
