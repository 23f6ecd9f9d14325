//! Icon shown at the leading edge of the address bar

use serde::{Deserialize, Serialize};

use crate::machine::InputState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum UrlBarIcon {
    /// Nothing of ours; the chrome shows site identity
    None,
    Search,
    /// A search shortcut is active
    Provider { name: String, image: String },
}

impl InputState {
    pub fn icon(&self) -> UrlBarIcon {
        if let Some(keyword) = &self.keyword {
            return UrlBarIcon::Provider {
                name: keyword.provider.name.clone(),
                image: keyword.provider.image.clone(),
            };
        }

        let history_shown =
            self.suggestions_open && self.suggestions.iter().any(|c| c.is_history());
        if self.raw_text.is_empty() || history_shown {
            UrlBarIcon::None
        } else {
            UrlBarIcon::Search
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::tests::{history, type_text};
    use crate::machine::InputStateMachine;
    use omnibar_suggest::ProviderRegistry;

    #[test]
    fn test_empty_has_no_icon() {
        let machine = InputStateMachine::new();
        assert_eq!(machine.state().icon(), UrlBarIcon::None);
    }

    #[test]
    fn test_unmatched_text_shows_search() {
        let store = history();
        let mut machine = InputStateMachine::new();
        type_text(&mut machine, "rust traits", &store);
        assert_eq!(machine.state().icon(), UrlBarIcon::Search);
    }

    #[test]
    fn test_history_match_hides_search() {
        let store = history();
        let mut machine = InputStateMachine::new();
        type_text(&mut machine, "you", &store);
        assert_eq!(machine.state().raw_text(), "youtube.com");
        assert_eq!(machine.state().icon(), UrlBarIcon::None);
    }

    #[test]
    fn test_every_shortcut_shows_provider() {
        let store = history();
        for provider in ProviderRegistry::default_providers() {
            let mut machine = InputStateMachine::new();
            type_text(&mut machine, &format!("{} ", provider.shortcut), &store);
            assert_eq!(
                machine.state().icon(),
                UrlBarIcon::Provider {
                    name: provider.name.clone(),
                    image: provider.image.clone(),
                }
            );
        }
    }

    #[test]
    fn test_icon_serializes_tagged() {
        let icon = UrlBarIcon::Provider {
            name: "Google".to_string(),
            image: "https://www.google.com/favicon.ico".to_string(),
        };
        let json = serde_json::to_value(&icon).unwrap();
        assert_eq!(json["kind"], "provider");
        assert_eq!(json["name"], "Google");

        let json = serde_json::to_string(&UrlBarIcon::Search).unwrap();
        assert_eq!(json, r#"{"kind":"search"}"#);
    }
}
