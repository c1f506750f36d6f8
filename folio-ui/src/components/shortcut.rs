use crate::browser::{is_editable_target, open_in_new_tab};
use crate::components::toast::use_toasts;
use folio_core::notice::Notice;
use folio_core::shortcut::{KeyPress, Shortcut};
use leptos::ev;
use leptos::prelude::*;

/// Window-wide single-key shortcut that opens `shortcut.url` in a new tab.
#[component]
#[allow(clippy::unused_unit)]
pub fn ShortcutListener(shortcut: Shortcut, #[prop(into)] description: String) -> impl IntoView {
    let toasts = use_toasts();

    let handle = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        let press = KeyPress {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
            editable_target: is_editable_target(ev.target()),
        };
        if !shortcut.matches(&press) {
            return;
        }
        tracing::info!(key = %shortcut.key, url = %shortcut.url, "shortcut triggered");
        open_in_new_tab(&shortcut.url);
        if let Some(toasts) = toasts {
            toasts.push(Notice::shortcut_activated(&description));
        }
    });
    on_cleanup(move || handle.remove());

    view! {}
}
