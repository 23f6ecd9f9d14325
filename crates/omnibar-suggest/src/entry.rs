//! Entries and ranked candidates

use serde::{Deserialize, Serialize};

/// A history or bookmark record as the store hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub location: String,
    #[serde(default)]
    pub title: String,
}

impl Entry {
    pub fn new(location: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            title: title.into(),
        }
    }

    /// Entry without a title, like a site added before its page loaded
    pub fn location(location: impl Into<String>) -> Self {
        Self::new(location, String::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    /// Derived from a history or bookmark entry
    History,
    /// Derived from a search provider shortcut
    Provider,
}

/// One suggestion for a particular query.
///
/// `matched_text` is the form of the location that matched the query
/// (raw, scheme-stripped or `www.`-stripped); it is what the address bar
/// displays when the candidate is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub entry: Entry,
    pub matched_text: String,
    pub score: f64,
    pub kind: CandidateKind,
}

impl Candidate {
    pub fn is_history(&self) -> bool {
        self.kind == CandidateKind::History
    }

    /// Text the display should show for this row
    pub fn display_title(&self) -> &str {
        if self.entry.title.is_empty() {
            &self.matched_text
        } else {
            &self.entry.title
        }
    }
}
