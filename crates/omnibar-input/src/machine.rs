//! Address bar edit state
//!
//! `InputStateMachine` owns the one `InputState` of a focused address bar.
//! All mutation goes through its handlers, called one at a time from the UI
//! event loop:
//!
//! - edits (`insert_text`, `backspace`, `delete_forward`, `set_value`) strip
//!   any inline suffix, apply the edit and cut a new `LookupRequest`
//! - `apply_lookup` installs the result of the latest request only
//! - `focus` / `blur` handle the focus command and losing focus
//!
//! Arrow keys, escape and enter live in `list`, `escape` and `commit`.

use omnibar_suggest::{Candidate, KeywordMatch};

use crate::error::InputError;
use crate::escape::EscapePresses;
use crate::lookup::{LookupRequest, LookupResult};
use crate::selection::Selection;
use crate::state::InputPhase;
use crate::Result;

/// Inline completion offered by the latest lookup for its top candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineCompletion {
    /// What the user had typed; the rest of the top candidate is the suffix
    pub query: String,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub(crate) raw_text: String,
    pub(crate) selection: Selection,
    pub(crate) committed_text: String,
    pub(crate) suggestions_open: bool,
    pub(crate) suggestions: Vec<Candidate>,
    pub(crate) selected_index: Option<usize>,
    pub(crate) escape_presses: EscapePresses,
    pub(crate) phase: InputPhase,
    pub(crate) inline: Option<InlineCompletion>,
    pub(crate) keyword: Option<KeywordMatch>,
    /// Text edited since the last commit, revert or blur
    pub(crate) dirty: bool,
}

impl InputState {
    /// Exactly what the field shows, inline suffix included
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected_text(&self) -> &str {
        self.selection.slice(&self.raw_text)
    }

    /// URL the page currently shows; target of escape
    pub fn committed_text(&self) -> &str {
        &self.committed_text
    }

    pub fn suggestions_open(&self) -> bool {
        self.suggestions_open
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn escape_presses(&self) -> EscapePresses {
        self.escape_presses
    }

    pub fn phase(&self) -> InputPhase {
        self.phase
    }

    pub fn inline_completion(&self) -> Option<&InlineCompletion> {
        self.inline.as_ref()
    }

    /// Search shortcut resolved for the current text
    pub fn keyword(&self) -> Option<&KeywordMatch> {
        self.keyword.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The untyped suffix while `Autocompleted`
    pub fn autocompleted_suffix(&self) -> Option<&str> {
        match (&self.phase, &self.inline) {
            (InputPhase::Autocompleted, Some(inline)) => self.raw_text.get(inline.query.len()..),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct InputStateMachine {
    pub(crate) state: InputState,
    /// Last sequence number handed out
    last_seq: u64,
    /// Request whose result may still apply
    pub(crate) pending: Option<u64>,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Machine showing `url` as the committed page
    pub fn with_committed(url: impl Into<String>) -> Self {
        let mut machine = Self::new();
        let url = url.into();
        machine.state.phase = InputPhase::for_text(&url);
        machine.state.selection = Selection::caret(url.len());
        machine.state.raw_text = url.clone();
        machine.state.committed_text = url;
        machine
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Sequence number of the lookup still awaited, if any
    pub fn pending_lookup(&self) -> Option<u64> {
        self.pending
    }

    // === Edits ===

    /// Type `text`, replacing the selection
    pub fn insert_text(&mut self, text: &str) -> Result<Option<LookupRequest>> {
        self.state.escape_presses = EscapePresses::None;
        self.strip_inline_suffix();

        let Selection { start, end } = self.state.selection;
        self.state.raw_text.replace_range(start..end, text);
        self.state.selection = Selection::caret(start + text.len());

        self.after_edit(true)
    }

    /// Delete backwards: the selection if any, else the char before the caret
    pub fn backspace(&mut self) -> Result<Option<LookupRequest>> {
        self.state.escape_presses = EscapePresses::None;
        if self.strip_inline_suffix() {
            return self.after_edit(false);
        }

        let Selection { start, end } = self.state.selection;
        let range = if start != end {
            start..end
        } else if let Some(prev) = self.state.raw_text[..start].chars().next_back() {
            start - prev.len_utf8()..start
        } else {
            return Ok(None);
        };

        self.state.raw_text.replace_range(range.clone(), "");
        self.state.selection = Selection::caret(range.start);
        self.after_edit(false)
    }

    /// Delete forwards: the selection if any, else the char after the caret
    pub fn delete_forward(&mut self) -> Result<Option<LookupRequest>> {
        self.state.escape_presses = EscapePresses::None;
        if self.strip_inline_suffix() {
            return self.after_edit(false);
        }

        let Selection { start, end } = self.state.selection;
        let range = if start != end {
            start..end
        } else if let Some(next) = self.state.raw_text[end..].chars().next() {
            end..end + next.len_utf8()
        } else {
            return Ok(None);
        };

        self.state.raw_text.replace_range(range.clone(), "");
        self.state.selection = Selection::caret(range.start);
        self.after_edit(false)
    }

    /// Replace the whole text, as a paste over a full selection does
    pub fn set_value(&mut self, text: &str) -> Result<Option<LookupRequest>> {
        self.state.escape_presses = EscapePresses::None;
        self.state.raw_text = text.to_string();
        self.state.selection = Selection::caret(text.len());
        self.after_edit(true)
    }

    /// Move the selection. Accepts any shown inline suffix as typed text.
    pub fn select(&mut self, start: usize, end: usize) -> Result<()> {
        let selection = Selection::new(start, end);
        selection.validate(&self.state.raw_text)?;

        self.state.escape_presses = EscapePresses::None;
        if self.state.phase == InputPhase::Autocompleted {
            self.state.inline = None;
            self.transition_to(InputPhase::Typing)?;
        }
        self.state.selection = selection;
        Ok(())
    }

    /// Drop a shown inline suffix so it never becomes part of the query.
    ///
    /// Returns true if the suffix was the selection, which the edit then
    /// consumes.
    fn strip_inline_suffix(&mut self) -> bool {
        if self.state.phase != InputPhase::Autocompleted {
            return false;
        }
        let Some(inline) = self.state.inline.take() else {
            return false;
        };

        let typed_len = inline.query.len();
        let suffix = Selection::new(typed_len, self.state.raw_text.len());
        let consumed = self.state.selection == suffix && !suffix.is_collapsed();

        self.state.raw_text.truncate(typed_len);
        self.state.selection = Selection::caret(typed_len);
        self.state.phase = InputPhase::Typing;
        consumed
    }

    fn after_edit(&mut self, allow_inline: bool) -> Result<Option<LookupRequest>> {
        self.state.dirty = true;
        self.state.inline = None;
        self.state.keyword = None;
        self.state.selected_index = None;
        self.transition_to(InputPhase::for_text(&self.state.raw_text))?;

        if self.state.raw_text.is_empty() {
            self.pending = None;
            self.close_suggestions();
            return Ok(None);
        }

        self.last_seq += 1;
        self.pending = Some(self.last_seq);

        tracing::trace!(seq = self.last_seq, query = %self.state.raw_text, "Lookup dispatched");

        Ok(Some(LookupRequest {
            seq: self.last_seq,
            query: self.state.raw_text.clone(),
            allow_inline,
        }))
    }

    // === Lookup results ===

    /// Install a lookup result. Returns false if it was stale and dropped.
    pub fn apply_lookup(&mut self, result: LookupResult) -> Result<bool> {
        if self.pending != Some(result.seq) {
            tracing::debug!(
                seq = result.seq,
                latest = self.last_seq,
                "Discarding stale lookup result"
            );
            return Ok(false);
        }
        self.pending = None;

        let needle = result.query.to_lowercase();
        if let Some(bad) = result.candidates.iter().find(|c| {
            c.matched_text.is_empty()
                || (c.is_history() && !c.matched_text.to_lowercase().starts_with(&needle))
        }) {
            return Err(InputError::MalformedCandidate {
                query: result.query.clone(),
                matched: bad.matched_text.clone(),
            });
        }

        self.state.keyword = result.keyword;
        self.state.suggestions = result.candidates;
        self.state.suggestions_open = !self.state.suggestions.is_empty();
        self.state.selected_index = None;
        self.state.inline = None;

        let caret_at_end = self.state.selection == Selection::caret(self.state.raw_text.len());
        let completion = self
            .state
            .suggestions
            .first()
            .filter(|top| {
                result.allow_inline
                    && caret_at_end
                    && top.is_history()
                    && top.matched_text.len() > result.query.len()
                    && top.matched_text.starts_with(&result.query)
            })
            .map(|top| top.matched_text.clone());

        if let Some(completed) = completion {
            tracing::debug!(
                query = %result.query,
                completed = %completed,
                "Applying inline autocompletion"
            );
            self.state.selection = Selection::new(result.query.len(), completed.len());
            self.state.raw_text = completed;
            self.state.inline = Some(InlineCompletion {
                query: result.query,
            });
            self.state.selected_index = Some(0);
            self.transition_to(InputPhase::Autocompleted)?;
        }

        Ok(true)
    }

    // === Focus ===

    /// The explicit "focus the address bar" command.
    ///
    /// Adopts `current_url` as the committed text; shows it unless the user
    /// has pending edits, which are kept. Selects everything and never opens
    /// the list.
    pub fn focus(&mut self, current_url: &str) -> Result<()> {
        self.state.committed_text = current_url.to_string();
        if !self.state.dirty {
            self.state.raw_text = self.state.committed_text.clone();
            self.state.keyword = None;
        }

        self.pending = None;
        self.state.inline = None;
        self.state.escape_presses = EscapePresses::None;
        self.close_suggestions();
        self.state.selection = Selection::all(&self.state.raw_text);
        self.transition_to(InputPhase::for_text(&self.state.raw_text))?;

        tracing::debug!(committed = %self.state.committed_text, "Address bar focused");
        Ok(())
    }

    /// Focus moved elsewhere: back to the committed text.
    pub fn blur(&mut self) -> Result<()> {
        self.reset_to_committed()?;
        self.state.selection = Selection::caret(self.state.raw_text.len());
        Ok(())
    }

    // === Shared helpers ===

    pub(crate) fn close_suggestions(&mut self) {
        self.state.suggestions_open = false;
        self.state.suggestions.clear();
        self.state.selected_index = None;
    }

    /// Show the committed text with no pending lookup, list or completion
    pub(crate) fn reset_to_committed(&mut self) -> Result<()> {
        self.pending = None;
        self.state.raw_text = self.state.committed_text.clone();
        self.state.inline = None;
        self.state.keyword = None;
        self.state.dirty = false;
        self.state.escape_presses = EscapePresses::None;
        self.close_suggestions();
        self.state.selection = Selection::all(&self.state.raw_text);
        self.transition_to(InputPhase::for_text(&self.state.raw_text))
    }

    pub(crate) fn transition_to(&mut self, phase: InputPhase) -> Result<()> {
        let from = self.state.phase;
        if !from.can_transition_to(phase) {
            return Err(InputError::InvalidTransition {
                from: from.to_string(),
                to: phase.to_string(),
            });
        }

        if from != phase {
            tracing::debug!(from = %from, to = %phase, "Address bar phase transition");
        }
        self.state.phase = phase;
        Ok(())
    }
}
