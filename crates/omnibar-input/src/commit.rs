//! Submitting the address bar and tracking navigation outcomes

use omnibar_suggest::ProviderRegistry;
use serde::{Deserialize, Serialize};

use crate::escape::EscapePresses;
use crate::machine::InputStateMachine;
use crate::selection::Selection;
use crate::state::InputPhase;
use crate::Result;

/// What enter hands to the navigator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub url: String,
    /// Search provider that built `url`, if a shortcut was used
    pub provider: Option<String>,
}

impl InputStateMachine {
    /// Submit the current text. Empty text submits nothing.
    ///
    /// The text stays as submitted until the navigation commits.
    pub fn on_enter(&mut self, providers: &ProviderRegistry) -> Result<Option<Submission>> {
        self.state.escape_presses = EscapePresses::None;
        if self.state.raw_text.is_empty() {
            return Ok(None);
        }

        let submission = match providers.resolve(&self.state.raw_text) {
            Some(keyword) => Submission {
                url: keyword.query_url(),
                provider: Some(keyword.provider.name.clone()),
            },
            None => Submission {
                url: self.state.raw_text.clone(),
                provider: None,
            },
        };

        self.pending = None;
        self.state.inline = None;
        self.state.dirty = false;
        self.close_suggestions();
        self.state.selection = Selection::caret(self.state.raw_text.len());
        self.transition_to(InputPhase::for_text(&self.state.raw_text))?;

        tracing::info!(
            url = %submission.url,
            provider = submission.provider.as_deref().unwrap_or("-"),
            "Address bar submitted"
        );
        Ok(Some(submission))
    }

    /// The navigator committed `url`.
    ///
    /// Shows it unless the user has started editing again since submitting.
    pub fn on_navigation_committed(&mut self, url: &str) -> Result<()> {
        self.state.committed_text = url.to_string();
        tracing::info!(url, "Navigation committed");

        if self.state.dirty {
            return Ok(());
        }
        self.reset_to_committed()?;
        self.state.selection = Selection::caret(self.state.raw_text.len());
        Ok(())
    }

    /// The navigator gave up on `url`. The text stays as submitted.
    pub fn on_navigation_failed(&mut self, url: &str, reason: &str) {
        tracing::warn!(url, reason, "Navigation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::tests::{history, type_text};

    #[test]
    fn test_enter_submits_autocompleted_text() {
        let store = history();
        let mut machine = InputStateMachine::new();
        type_text(&mut machine, "br", &store);

        let submission = machine
            .on_enter(&ProviderRegistry::defaults())
            .unwrap()
            .unwrap();
        assert_eq!(submission.url, "brave.com");
        assert_eq!(submission.provider, None);

        let state = machine.state();
        assert_eq!(state.raw_text(), "brave.com");
        assert!(!state.suggestions_open());
        assert!(state.selection().is_collapsed());
        assert_eq!(state.phase(), InputPhase::Typing);
        assert_eq!(machine.pending_lookup(), None);
    }

    #[test]
    fn test_enter_with_shortcut_submits_query_url() {
        let store = history();
        let mut machine = InputStateMachine::new();
        type_text(&mut machine, ":yt cats", &store);

        let submission = machine
            .on_enter(&ProviderRegistry::defaults())
            .unwrap()
            .unwrap();
        assert_eq!(submission.provider.as_deref(), Some("YouTube"));
        assert!(submission.url.ends_with("search_query=cats"));
        assert_eq!(machine.state().raw_text(), ":yt cats");
    }

    #[test]
    fn test_enter_on_empty_submits_nothing() {
        let mut machine = InputStateMachine::new();
        assert_eq!(machine.on_enter(&ProviderRegistry::defaults()).unwrap(), None);
    }

    #[test]
    fn test_committed_navigation_updates_text() {
        let store = history();
        let mut machine = InputStateMachine::with_committed("https://example.com/");
        machine.select(0, 20).unwrap();
        type_text(&mut machine, "brave.com/test", &store);
        machine.on_enter(&ProviderRegistry::defaults()).unwrap();

        machine
            .on_navigation_committed("https://brave.com/test")
            .unwrap();
        let state = machine.state();
        assert_eq!(state.committed_text(), "https://brave.com/test");
        assert_eq!(state.raw_text(), "https://brave.com/test");
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_commit_keeps_newer_edits() {
        let store = history();
        let mut machine = InputStateMachine::new();
        type_text(&mut machine, "brave.com", &store);
        machine.on_enter(&ProviderRegistry::defaults()).unwrap();
        type_text(&mut machine, "/x", &store);

        machine.on_navigation_committed("https://brave.com/").unwrap();
        assert_eq!(machine.state().raw_text(), "brave.com/x");
        assert_eq!(machine.state().committed_text(), "https://brave.com/");

        // Escape now reverts to the new page
        machine.on_escape().unwrap();
        assert_eq!(machine.state().raw_text(), "https://brave.com/");
    }

    #[test]
    fn test_failed_navigation_leaves_text() {
        let mut machine = InputStateMachine::with_committed("https://example.com/");
        machine.set_value("nowhere.invalid").unwrap();
        machine.on_enter(&ProviderRegistry::defaults()).unwrap();

        machine.on_navigation_failed("nowhere.invalid", "dns lookup failed");
        let state = machine.state();
        assert_eq!(state.raw_text(), "nowhere.invalid");
        assert_eq!(state.committed_text(), "https://example.com/");
    }
}
