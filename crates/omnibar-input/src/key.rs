//! Keys the address bar reacts to

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Char(char),
    Backspace,
    /// Forward delete
    Delete,
    ArrowUp,
    ArrowDown,
    Escape,
    Enter,
}

impl Key {
    /// Map a WebDriver key code point; plain chars map to `Key::Char`.
    ///
    /// Modifiers and keys the address bar ignores (shift, control, ...) map
    /// to `None`.
    pub fn from_webdriver(c: char) -> Option<Self> {
        match c {
            '\u{E003}' => Some(Key::Backspace),
            '\u{E017}' => Some(Key::Delete),
            '\u{E013}' => Some(Key::ArrowUp),
            '\u{E015}' => Some(Key::ArrowDown),
            '\u{E00C}' => Some(Key::Escape),
            '\u{E006}' | '\u{E007}' => Some(Key::Enter),
            // Rest of the WebDriver private-use block
            '\u{E000}'..='\u{F8FF}' => None,
            c if c.is_control() => None,
            c => Some(Key::Char(c)),
        }
    }

    /// Keys for a WebDriver `keys()` string
    pub fn sequence(keys: &str) -> Vec<Key> {
        keys.chars().filter_map(Key::from_webdriver).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webdriver_codes() {
        assert_eq!(Key::from_webdriver('a'), Some(Key::Char('a')));
        assert_eq!(Key::from_webdriver('\u{E015}'), Some(Key::ArrowDown));
        assert_eq!(Key::from_webdriver('\u{E013}'), Some(Key::ArrowUp));
        assert_eq!(Key::from_webdriver('\u{E00C}'), Some(Key::Escape));
        assert_eq!(Key::from_webdriver('\u{E007}'), Some(Key::Enter));
        // Shift is a modifier, not an edit
        assert_eq!(Key::from_webdriver('\u{E008}'), None);
    }

    #[test]
    fn test_sequence_drops_modifiers() {
        let keys = Key::sequence("a\u{E008}\u{E008}b\u{E003}");
        assert_eq!(
            keys,
            vec![Key::Char('a'), Key::Char('b'), Key::Backspace]
        );
    }
}
