//! Full typewriter cycles over real phrase lists.

use folio_core::timer::TimerSlot;
use folio_core::typewriter::{Mode, Typewriter, TypewriterError, TypewriterTiming};
use pretty_assertions::assert_eq;
use std::time::Duration;

const PHRASES: [&str; 3] = [
    "Generative AI & ML Developer",
    "Computer Vision Enthusiast",
    "Full-Stack Explorer",
];

#[test]
fn each_phrase_types_holds_deletes_and_advances() {
    let timing = TypewriterTiming::default();
    let mut machine = Typewriter::new(PHRASES, timing).unwrap();

    for round in 0..PHRASES.len() * 2 {
        let index = round % PHRASES.len();
        let phrase = PHRASES[index];
        let n = phrase.chars().count();
        assert_eq!(machine.phrase_index(), index);
        assert_eq!(machine.display(), "");

        for _ in 0..n {
            assert_eq!(machine.next_delay(), Duration::from_millis(timing.type_ms));
            machine.tick();
        }
        assert_eq!(machine.display(), phrase);
        assert!(machine.is_holding());
        assert_eq!(machine.next_delay(), Duration::from_millis(timing.hold_ms));

        for _ in 0..n {
            machine.tick();
        }
        assert_eq!(machine.display(), "");
        assert_eq!(machine.mode(), Mode::Typing);
        assert_eq!(machine.phrase_index(), (index + 1) % PHRASES.len());
    }
}

#[test]
fn multibyte_phrases_slice_on_characters() {
    let mut machine = Typewriter::new(["héllo ✨"], TypewriterTiming::default()).unwrap();
    let mut seen = Vec::new();
    for _ in 0..7 {
        machine.tick();
        seen.push(machine.display().to_string());
    }
    assert_eq!(seen[1], "hé");
    assert_eq!(seen[6], "héllo ✨");
}

#[test]
fn empty_list_is_rejected() {
    let err = Typewriter::new(Vec::<String>::new(), TypewriterTiming::default()).unwrap_err();
    assert_eq!(err, TypewriterError::NoPhrases);
}

/// Stand-in for the browser timer queue: handles are sequence numbers.
#[derive(Default)]
struct Timers {
    next: u32,
    queued: Vec<u32>,
}

impl Timers {
    fn schedule(&mut self, slot: &mut TimerSlot<u32>) {
        self.next += 1;
        self.queued.push(self.next);
        if let Some(stale) = slot.arm(self.next) {
            self.cancel(stale);
        }
    }

    fn cancel(&mut self, handle: u32) {
        self.queued.retain(|h| *h != handle);
    }

    /// Run the oldest queued callback the way the component does.
    fn run_next(&mut self, slot: &mut TimerSlot<u32>, machine: &mut Typewriter) -> bool {
        if self.queued.is_empty() {
            return false;
        }
        self.queued.remove(0);
        if slot.fire() {
            machine.tick();
            self.schedule(slot);
        }
        true
    }
}

#[test]
fn teardown_cancels_the_pending_tick() {
    let mut machine = Typewriter::new(PHRASES, TypewriterTiming::default()).unwrap();
    let mut slot = TimerSlot::default();
    let mut timers = Timers::default();

    timers.schedule(&mut slot);
    for _ in 0..5 {
        assert!(timers.run_next(&mut slot, &mut machine));
    }
    assert_eq!(machine.display(), "Gener");
    assert_eq!(timers.queued.len(), 1);

    if let Some(handle) = slot.dispose() {
        timers.cancel(handle);
    }
    assert!(timers.queued.is_empty());
    assert!(!timers.run_next(&mut slot, &mut machine));
    assert_eq!(machine.display(), "Gener");
}

#[test]
fn callback_racing_teardown_does_not_reschedule() {
    let mut machine = Typewriter::new(PHRASES, TypewriterTiming::default()).unwrap();
    let mut slot = TimerSlot::default();
    let mut timers = Timers::default();

    timers.schedule(&mut slot);
    // The browser already dequeued the callback when the owner went away.
    slot.dispose();
    assert!(timers.run_next(&mut slot, &mut machine));

    assert_eq!(machine.display(), "");
    assert!(timers.queued.is_empty());
    assert!(!slot.is_pending());
}
