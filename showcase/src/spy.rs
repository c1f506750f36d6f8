//! Scroll-spy wiring: window scroll events, coalesced to one measurement per
//! animation frame, drive the active section and the scroll chrome.

use folio_core::scroll_spy::{FrameGate, ScrollChrome, ScrollSpy};
use folio_core::sections::{Section, ShowcaseSection};
use folio_core::timer::TimerSlot;
use folio_ui::browser;
use leptos::ev;
use leptos::prelude::*;

/// Reactive view of the scroll position.
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    pub active: RwSignal<ShowcaseSection>,
    pub chrome: RwSignal<ScrollChrome>,
}

/// Install the scroll listener for the current owner.
pub fn track_scroll(offset: f64) -> ScrollState {
    let state = ScrollState {
        active: RwSignal::new(ShowcaseSection::DEFAULT),
        chrome: RwSignal::new(ScrollChrome::default()),
    };
    let spy = StoredValue::new(ScrollSpy::<ShowcaseSection>::new(offset));
    let gate = StoredValue::new(FrameGate::default());
    let frame = StoredValue::new(TimerSlot::<AnimationFrameRequestHandle>::default());

    let measure = move || {
        if !frame.try_update_value(|f| f.fire()).unwrap_or(false) {
            return;
        }
        let _ = gate.try_update_value(|gate| gate.complete());
        let transition =
            spy.try_update_value(|spy| spy.observe(|section| browser::element_bounds(section.id())));
        if let Some(section) = transition.and_then(|t| t.target()) {
            let _ = state.active.try_set(section);
        }
        let chrome = ScrollChrome::from_scroll_y(browser::scroll_y());
        if state.chrome.try_get_untracked() != Some(chrome) {
            let _ = state.chrome.try_set(chrome);
        }
    };

    let request = move || match request_animation_frame_with_handle(measure) {
        Ok(handle) => match frame.try_update_value(|f| f.arm(handle)) {
            Some(None) => {}
            Some(Some(stale)) => stale.cancel(),
            None => handle.cancel(),
        },
        Err(err) => {
            tracing::warn!(?err, "requestAnimationFrame unavailable");
            let _ = gate.try_update_value(|gate| gate.complete());
        }
    };

    let listener = window_event_listener(ev::scroll, move |_| {
        if gate.try_update_value(|gate| gate.request()).unwrap_or(false) {
            request();
        }
    });
    on_cleanup(move || {
        listener.remove();
        if let Some(Some(handle)) = frame.try_update_value(|f| f.dispose()) {
            handle.cancel();
        }
    });

    // First measurement once the sections are in the DOM.
    request();
    state
}
