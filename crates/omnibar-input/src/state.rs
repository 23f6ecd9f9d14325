//! Address bar phase machine
//!
//! ```text
//! Empty
//!   ↓ type
//! Typing ⇄ Autocompleted     (lookup applies / edit strips inline suffix)
//!   ↓ arrow        ↓ arrow
//! ListOpen ──────→ Autocompleted (arrow back to the inline candidate)
//! ```
//!
//! Every phase may fall back to `Empty` (text cleared) or `Typing`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPhase {
    /// No text in the field
    #[default]
    Empty,
    /// Text without an applied inline completion
    Typing,
    /// Text carries a selected, untyped completion suffix
    Autocompleted,
    /// A list candidate other than the inline one is highlighted
    ListOpen,
}

impl InputPhase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: InputPhase) -> bool {
        match (self, target) {
            // Same phase is always valid (no-op)
            (a, b) if *a == b => true,
            // Anything can be cleared or fall back to plain text
            (_, InputPhase::Empty) | (_, InputPhase::Typing) => true,
            // Completions and highlights need text first
            (InputPhase::Empty, _) => false,
            (_, InputPhase::Autocompleted) | (_, InputPhase::ListOpen) => true,
        }
    }

    /// Phase for plain text: `Empty` or `Typing`
    pub fn for_text(text: &str) -> Self {
        if text.is_empty() {
            InputPhase::Empty
        } else {
            InputPhase::Typing
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputPhase::Empty => "empty",
            InputPhase::Typing => "typing",
            InputPhase::Autocompleted => "autocompleted",
            InputPhase::ListOpen => "listopen",
        }
    }
}

impl std::fmt::Display for InputPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for InputPhase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empty" => Ok(InputPhase::Empty),
            "typing" => Ok(InputPhase::Typing),
            "autocompleted" => Ok(InputPhase::Autocompleted),
            "listopen" => Ok(InputPhase::ListOpen),
            _ => Err(format!("Unknown input phase: {}", s)),
        }
    }
}
