//! Candidate lookups
//!
//! A `LookupRequest` is cut by the state machine on every edit. Running it
//! may block on the store, so the machine never runs it itself; whoever owns
//! the event loop does, and hands the `LookupResult` back through
//! `InputStateMachine::apply_lookup`.

use omnibar_suggest::{Candidate, CandidateStore, KeywordMatch, MatchRanker, ProviderRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// Strictly increasing per machine; only the latest may apply
    pub seq: u64,
    pub query: String,
    /// False after deletions, so a removed completion is not re-applied
    pub allow_inline: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LookupResult {
    pub seq: u64,
    pub query: String,
    pub allow_inline: bool,
    pub candidates: Vec<Candidate>,
    pub keyword: Option<KeywordMatch>,
}

impl LookupRequest {
    /// Result carrying `candidates` for this request
    pub fn respond(
        self,
        candidates: Vec<Candidate>,
        keyword: Option<KeywordMatch>,
    ) -> LookupResult {
        LookupResult {
            seq: self.seq,
            query: self.query,
            allow_inline: self.allow_inline,
            candidates,
            keyword,
        }
    }

    /// Resolve a search shortcut, or rank the store's entries.
    ///
    /// A failing store yields an empty result; the failure is only logged.
    pub fn run<S>(
        self,
        store: &S,
        providers: &ProviderRegistry,
        ranker: &MatchRanker,
    ) -> LookupResult
    where
        S: CandidateStore + ?Sized,
    {
        if let Some(keyword) = providers.resolve(&self.query) {
            tracing::debug!(
                seq = self.seq,
                provider = %keyword.provider.name,
                "Search shortcut resolved"
            );
            let candidate = keyword.candidate(&self.query);
            return self.respond(vec![candidate], Some(keyword));
        }

        let entries = match store.query(&self.query) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(seq = self.seq, error = %e, "Candidate store query failed");
                Vec::new()
            }
        };

        let candidates = ranker.rank(&self.query, &entries);
        tracing::trace!(seq = self.seq, count = candidates.len(), "Lookup ranked");
        self.respond(candidates, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnibar_suggest::{CandidateKind, Entry, MemoryStore, SuggestError};

    struct BrokenStore;

    impl CandidateStore for BrokenStore {
        fn query(&self, _prefix_hint: &str) -> omnibar_suggest::Result<Vec<Entry>> {
            Err(SuggestError::Unavailable("disk gone".to_string()))
        }
    }

    fn request(query: &str) -> LookupRequest {
        LookupRequest {
            seq: 7,
            query: query.to_string(),
            allow_inline: true,
        }
    }

    #[test]
    fn test_run_ranks_store() {
        let store = MemoryStore::with_entries(vec![Entry::location("https://brave.com")]);
        let providers = ProviderRegistry::defaults();
        let result = request("br").run(&store, &providers, &MatchRanker::new());
        assert_eq!(result.seq, 7);
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].matched_text, "brave.com");
        assert!(result.keyword.is_none());
    }

    #[test]
    fn test_run_prefers_shortcut() {
        let store = MemoryStore::with_entries(vec![Entry::location("https://:g.test")]);
        let providers = ProviderRegistry::defaults();
        let result = request(":g ").run(&store, &providers, &MatchRanker::new());
        assert_eq!(result.keyword.unwrap().provider.name, "Google");
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].kind, CandidateKind::Provider);
    }

    #[test]
    fn test_store_failure_is_empty() {
        let providers = ProviderRegistry::defaults();
        let result = request("br").run(&BrokenStore, &providers, &MatchRanker::new());
        assert!(result.candidates.is_empty());
        assert!(result.keyword.is_none());
    }
}
