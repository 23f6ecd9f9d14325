//! Arrow-key navigation over the suggestion list
//!
//! Moves only re-apply candidates already fetched; they never cut a lookup.
//! Down stops at the last candidate and up at the first.

use crate::escape::EscapePresses;
use crate::machine::InputStateMachine;
use crate::selection::Selection;
use crate::state::InputPhase;
use crate::Result;

impl InputStateMachine {
    pub fn on_arrow_down(&mut self) -> Result<()> {
        self.state.escape_presses = EscapePresses::None;
        if !self.state.suggestions_open || self.state.suggestions.is_empty() {
            return Ok(());
        }

        let last = self.state.suggestions.len() - 1;
        let next = match self.state.selected_index {
            None => 0,
            Some(i) => (i + 1).min(last),
        };
        self.highlight(next)
    }

    pub fn on_arrow_up(&mut self) -> Result<()> {
        self.state.escape_presses = EscapePresses::None;
        if !self.state.suggestions_open {
            return Ok(());
        }

        match self.state.selected_index {
            Some(i) => self.highlight(i.saturating_sub(1)),
            None => Ok(()),
        }
    }

    fn highlight(&mut self, index: usize) -> Result<()> {
        if self.state.selected_index == Some(index) {
            return Ok(());
        }

        // The visible list is what the user is choosing from now
        self.pending = None;

        let candidate = &self.state.suggestions[index];
        self.state.raw_text = candidate.matched_text.clone();
        if candidate.is_history() {
            self.state.keyword = None;
        }

        let inline_len = self
            .state
            .inline
            .as_ref()
            .map(|inline| inline.query.len())
            .filter(|_| index == 0);

        match inline_len {
            Some(typed_len) => {
                self.state.selection = Selection::new(typed_len, self.state.raw_text.len());
                self.transition_to(InputPhase::Autocompleted)?;
            }
            None => {
                self.state.selection = Selection::caret(self.state.raw_text.len());
                self.transition_to(InputPhase::ListOpen)?;
            }
        }

        self.state.selected_index = Some(index);
        tracing::debug!(index, text = %self.state.raw_text, "Suggestion highlighted");
        Ok(())
    }
}
