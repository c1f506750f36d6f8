use crate::browser::copy_to_clipboard;
use crate::components::toast::use_toasts;
use leptos::prelude::*;

/// Pill that copies its text when clicked.
#[component]
pub fn CopyChip(
    text: &'static str,
    /// Name used in the "copied" toast; defaults to the text itself.
    #[prop(optional)]
    label: Option<&'static str>,
    #[prop(optional, into)] style: Option<String>,
) -> impl IntoView {
    let toasts = use_toasts();
    let label = label.unwrap_or(text);

    view! {
        <button
            type="button"
            class="chip chip-copy"
            title=format!("Copy {label}")
            style=style
            on:click=move |_| copy_to_clipboard(text, label, toasts)
        >
            {text}
        </button>
    }
}
