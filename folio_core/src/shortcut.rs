//! Global single-key shortcut ("g" opens the code-hosting profile).

use serde::{Deserialize, Serialize};

/// One observed `keydown`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    /// `KeyboardEvent.key`
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    /// Focus was inside an input, textarea, select or contenteditable.
    pub editable_target: bool,
}

impl KeyPress {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: char,
    pub url: String,
}

impl Shortcut {
    pub fn new(key: char, url: impl Into<String>) -> Self {
        Self {
            key,
            url: url.into(),
        }
    }

    /// Case-insensitive match on a bare key press. Ctrl/Meta chords and
    /// typing inside form fields never trigger the shortcut.
    pub fn matches(&self, press: &KeyPress) -> bool {
        if press.ctrl || press.meta || press.editable_target {
            return false;
        }
        let mut chars = press.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_lowercase().eq(self.key.to_lowercase()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn github() -> Shortcut {
        Shortcut::new('g', "https://github.com/rithick-06")
    }

    #[test]
    fn matches_either_case() {
        assert!(github().matches(&KeyPress::plain("g")));
        assert!(github().matches(&KeyPress::plain("G")));
    }

    #[test]
    fn ignores_other_keys_and_named_keys() {
        assert!(!github().matches(&KeyPress::plain("h")));
        assert!(!github().matches(&KeyPress::plain("ArrowUp")));
        assert!(!github().matches(&KeyPress::plain("")));
    }

    #[test]
    fn ignores_chords() {
        let press = KeyPress {
            ctrl: true,
            ..KeyPress::plain("g")
        };
        assert!(!github().matches(&press));
        let press = KeyPress {
            meta: true,
            ..KeyPress::plain("g")
        };
        assert!(!github().matches(&press));
    }

    #[test]
    fn ignores_typing_in_form_fields() {
        let press = KeyPress {
            editable_target: true,
            ..KeyPress::plain("g")
        };
        assert!(!github().matches(&press));
    }
}
