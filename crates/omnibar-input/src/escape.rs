//! Escape handling

use serde::{Deserialize, Serialize};

use crate::machine::InputStateMachine;
use crate::Result;

/// Consecutive escape presses since the last other input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EscapePresses {
    #[default]
    None,
    Once,
    Repeated,
}

impl EscapePresses {
    pub fn next(self) -> Self {
        match self {
            EscapePresses::None => EscapePresses::Once,
            EscapePresses::Once | EscapePresses::Repeated => EscapePresses::Repeated,
        }
    }

    /// Press count, saturating at 2
    pub fn count(self) -> u8 {
        match self {
            EscapePresses::None => 0,
            EscapePresses::Once => 1,
            EscapePresses::Repeated => 2,
        }
    }
}

impl InputStateMachine {
    /// Revert to the committed text on the first press; later presses
    /// change nothing.
    pub fn on_escape(&mut self) -> Result<()> {
        let presses = self.state.escape_presses;
        if presses == EscapePresses::None {
            self.reset_to_committed()?;
            tracing::debug!(committed = %self.state.committed_text, "Escape reverted address bar");
        }
        self.state.escape_presses = presses.next();
        Ok(())
    }
}
