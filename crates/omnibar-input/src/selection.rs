//! Selection ranges over the address bar text
//!
//! Offsets are UTF-8 byte offsets into the displayed text and must fall on
//! char boundaries.

use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Collapsed selection (a caret) at `at`
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// The whole of `text`
    pub fn all(text: &str) -> Self {
        Self {
            start: 0,
            end: text.len(),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }

    /// Fail unless this selection addresses `text`
    pub fn validate(&self, text: &str) -> Result<()> {
        let in_bounds = self.start <= self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end);

        if in_bounds {
            Ok(())
        } else {
            Err(InputError::SelectionOutOfBounds {
                start: self.start,
                end: self.end,
                len: text.len(),
            })
        }
    }

    /// Selected slice of `text`; call only with a validated selection
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}
