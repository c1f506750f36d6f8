//! Typed-out rotating headline.

use folio_core::timer::TimerSlot;
use folio_core::typewriter::{Typewriter, TypewriterTiming};
use leptos::prelude::*;

type Slot = StoredValue<TimerSlot<TimeoutHandle>>;

/// Schedule the next tick. Each tick reschedules itself with the delay the
/// machine asks for, so there is only ever one pending timeout.
fn schedule(machine: StoredValue<Typewriter>, text: RwSignal<String>, slot: Slot) {
    if !slot.try_with_value(|s| s.is_live()).unwrap_or(false) {
        return;
    }
    let Some(delay) = machine.try_with_value(|m| m.next_delay()) else {
        return;
    };
    let handle = set_timeout_with_handle(
        move || {
            if !slot.try_update_value(|s| s.fire()).unwrap_or(false) {
                return;
            }
            let Some(shown) = machine.try_update_value(|m| {
                m.tick();
                m.display().to_string()
            }) else {
                return;
            };
            if text.try_set(shown).is_none() {
                schedule(machine, text, slot);
            }
        },
        delay,
    );
    match handle {
        Ok(handle) => {
            // Disposed slots (and replaced handles) come straight back.
            match slot.try_update_value(|s| s.arm(handle)) {
                Some(None) => {}
                Some(Some(stale)) => stale.clear(),
                None => handle.clear(),
            }
        }
        Err(err) => tracing::warn!(?err, "typewriter timer unavailable"),
    }
}

#[component]
pub fn TypewriterText(
    phrases: Vec<String>,
    #[prop(optional)] timing: TypewriterTiming,
) -> impl IntoView {
    let text = RwSignal::new(String::new());

    match Typewriter::new(phrases, timing) {
        Ok(machine) => {
            let machine = StoredValue::new(machine);
            let slot: Slot = StoredValue::new(TimerSlot::default());
            schedule(machine, text, slot);
            on_cleanup(move || {
                if let Some(Some(handle)) = slot.try_update_value(|s| s.dispose()) {
                    handle.clear();
                }
            });
        }
        Err(err) => tracing::warn!(%err, "typewriter disabled"),
    }

    view! {
        <span class="typewriter">
            <span class="typewriter-text">{move || text.get()}</span>
            <span class="typewriter-caret" aria-hidden="true">"|"</span>
        </span>
    }
}
