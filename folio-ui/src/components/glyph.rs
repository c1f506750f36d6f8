use folio_core::sections::Icon;
use leptos::prelude::*;

#[component]
pub fn Glyph(icon: Icon) -> impl IntoView {
    view! {
        <span class="glyph" role="img" aria-label=icon.aria_label()>
            {icon.glyph()}
        </span>
    }
}
