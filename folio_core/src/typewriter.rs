//! Typewriter text cycler.
//!
//! A two-state machine (typing / deleting) over a fixed phrase list. The
//! machine never owns a timer: the caller asks for [`Typewriter::next_delay`],
//! waits, then calls [`Typewriter::tick`]. Only one step is ever pending, so
//! tearing the view down is a matter of cancelling that single timer.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

/// Step delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Delay between typed characters.
    pub type_ms: u64,
    /// Delay between deleted characters.
    pub delete_ms: u64,
    /// Pause on a fully typed phrase before deleting starts.
    pub hold_ms: u64,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    phrases: Vec<String>,
    index: usize,
    /// Number of characters (not bytes) of the current phrase on screen.
    shown: usize,
    mode: Mode,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new<I, P>(phrases: I, timing: TypewriterTiming) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            index: 0,
            shown: 0,
            mode: Mode::Typing,
            timing,
        })
    }

    pub fn phrase_index(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phrase(&self) -> &str {
        &self.phrases[self.index]
    }

    fn phrase_len(&self) -> usize {
        self.phrase().chars().count()
    }

    /// Visible prefix of the current phrase.
    pub fn display(&self) -> &str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(byte, _)| byte)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    /// `true` while a complete phrase is on screen waiting to be deleted.
    pub fn is_holding(&self) -> bool {
        self.mode == Mode::Deleting && self.shown == self.phrase_len()
    }

    /// How long to wait before the next [`Typewriter::tick`].
    pub fn next_delay(&self) -> Duration {
        let ms = match self.mode {
            Mode::Typing => self.timing.type_ms,
            Mode::Deleting if self.is_holding() => self.timing.hold_ms,
            Mode::Deleting => self.timing.delete_ms,
        };
        Duration::from_millis(ms)
    }

    /// Advance the machine by one step.
    ///
    /// Typing adds one character; the tick that completes the phrase flips
    /// to deleting (the hold is expressed by [`Typewriter::next_delay`]).
    /// Deleting removes one character; the tick that empties the display
    /// moves to the next phrase and resumes typing.
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Typing => {
                let len = self.phrase_len();
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    self.mode = Mode::Deleting;
                }
            }
            Mode::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.index = (self.index + 1) % self.phrases.len();
                    self.mode = Mode::Typing;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(phrases: &[&str]) -> Typewriter {
        Typewriter::new(phrases.iter().copied(), TypewriterTiming::default()).unwrap()
    }

    #[test]
    fn rejects_empty_phrase_list() {
        let empty: [&str; 0] = [];
        assert_eq!(
            Typewriter::new(empty, TypewriterTiming::default()),
            Err(TypewriterError::NoPhrases)
        );
    }

    #[test]
    fn types_one_character_per_tick() {
        let mut tw = machine(&["Rust"]);
        assert_eq!(tw.display(), "");
        tw.tick();
        assert_eq!(tw.display(), "R");
        tw.tick();
        tw.tick();
        assert_eq!(tw.display(), "Rus");
        assert_eq!(tw.mode(), Mode::Typing);
        assert_eq!(tw.next_delay(), Duration::from_millis(100));
    }

    #[test]
    fn holds_then_deletes_faster() {
        let mut tw = machine(&["ab", "cd"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.display(), "ab");
        assert!(tw.is_holding());
        assert_eq!(tw.next_delay(), Duration::from_millis(2000));

        tw.tick();
        assert_eq!(tw.display(), "a");
        assert_eq!(tw.next_delay(), Duration::from_millis(50));
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut tw = machine(&["x", "y"]);
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(tw.mode(), Mode::Typing);
    }

    #[test]
    fn multibyte_phrases_slice_on_char_boundaries() {
        let mut tw = machine(&["Résumé"]);
        tw.tick();
        tw.tick();
        assert_eq!(tw.display(), "Ré");
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.display(), "Résumé");
    }

    #[test]
    fn empty_phrase_is_skipped_without_stalling() {
        let mut tw = machine(&["", "ok"]);
        tw.tick();
        assert_eq!(tw.mode(), Mode::Deleting);
        tw.tick();
        assert_eq!(tw.phrase_index(), 1);
        assert_eq!(tw.mode(), Mode::Typing);
    }
}
