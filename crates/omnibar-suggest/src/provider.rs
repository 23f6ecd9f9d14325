//! Search provider registry

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::SuggestError;
use crate::keyword::{self, KeywordMatch};
use crate::Result;

/// Placeholder in `query_template` replaced by the encoded search terms
pub const QUERY_PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchProvider {
    pub name: String,
    /// Token typed at the start of the input, followed by a space
    pub shortcut: String,
    /// Icon shown in the address bar while the shortcut is active
    pub image: String,
    /// Search URL with a `%s` placeholder
    pub query_template: String,
}

impl SearchProvider {
    pub fn new(
        name: impl Into<String>,
        shortcut: impl Into<String>,
        image: impl Into<String>,
        query_template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            shortcut: shortcut.into(),
            image: image.into(),
            query_template: query_template.into(),
        }
    }

    /// Build the search URL for `terms`
    pub fn query_url(&self, terms: &str) -> String {
        let encoded: String = url::form_urlencoded::byte_serialize(terms.as_bytes()).collect();
        self.query_template.replace(QUERY_PLACEHOLDER, &encoded)
    }

    fn validate(&self) -> Result<()> {
        if self.shortcut.is_empty() || self.shortcut.chars().any(char::is_whitespace) {
            return Err(SuggestError::InvalidShortcut(self.shortcut.clone()));
        }
        if !self.query_template.contains(QUERY_PLACEHOLDER) {
            return Err(SuggestError::InvalidTemplate {
                name: self.name.clone(),
                template: self.query_template.clone(),
            });
        }
        Ok(())
    }
}

/// Immutable set of search providers, unique by shortcut.
#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    providers: Vec<SearchProvider>,
}

impl ProviderRegistry {
    pub fn new(providers: Vec<SearchProvider>) -> Result<Self> {
        let mut shortcuts = HashSet::new();
        for provider in &providers {
            provider.validate()?;
            if !shortcuts.insert(provider.shortcut.as_str()) {
                return Err(SuggestError::DuplicateShortcut(provider.shortcut.clone()));
            }
        }

        tracing::debug!(count = providers.len(), "Loaded search providers");

        Ok(Self { providers })
    }

    /// Registry with the built-in provider list
    pub fn defaults() -> Self {
        Self {
            providers: Self::default_providers(),
        }
    }

    pub fn empty() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn default_providers() -> Vec<SearchProvider> {
        vec![
            SearchProvider::new(
                "Google",
                ":g",
                "https://www.google.com/favicon.ico",
                "https://www.google.com/search?q=%s",
            ),
            SearchProvider::new(
                "DuckDuckGo",
                ":d",
                "https://duckduckgo.com/favicon.ico",
                "https://duckduckgo.com/?q=%s",
            ),
            SearchProvider::new(
                "Bing",
                ":b",
                "https://www.bing.com/favicon.ico",
                "https://www.bing.com/search?q=%s",
            ),
            SearchProvider::new(
                "Wikipedia",
                ":w",
                "https://en.wikipedia.org/favicon.ico",
                "https://en.wikipedia.org/wiki/Special:Search?search=%s",
            ),
            SearchProvider::new(
                "YouTube",
                ":yt",
                "https://www.youtube.com/favicon.ico",
                "https://www.youtube.com/results?search_query=%s",
            ),
            SearchProvider::new(
                "GitHub",
                ":gh",
                "https://github.com/favicon.ico",
                "https://github.com/search?q=%s",
            ),
            SearchProvider::new(
                "Stack Overflow",
                ":s",
                "https://stackoverflow.com/favicon.ico",
                "https://stackoverflow.com/search?q=%s",
            ),
            SearchProvider::new(
                "Amazon",
                ":a",
                "https://www.amazon.com/favicon.ico",
                "https://www.amazon.com/s?k=%s",
            ),
        ]
    }

    pub fn providers(&self) -> &[SearchProvider] {
        &self.providers
    }

    pub fn get(&self, shortcut: &str) -> Option<&SearchProvider> {
        self.providers.iter().find(|p| p.shortcut == shortcut)
    }

    /// Resolve a leading shortcut in `raw_text`
    pub fn resolve(&self, raw_text: &str) -> Option<KeywordMatch> {
        keyword::resolve(raw_text, &self.providers)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::defaults()
    }
}
