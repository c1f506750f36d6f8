//! Console greeting for visitors who open devtools.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

fn styled(text: &str, css: &str) {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{text}")),
        &JsValue::from_str(css),
    );
}

fn print_banner(owner: &str, tagline: &str, hints: &[String]) {
    styled(
        &format!("\n  {owner}\n  {tagline}\n"),
        "color: #8B5CF6; font-family: monospace; font-size: 14px; font-weight: bold;",
    );
    for hint in hints {
        styled(&format!("(^_^) {hint}"), "color: #06B6D4;");
    }
    styled(
        "Built with Rust + Leptos.",
        "color: #888; font-size: 10px;",
    );
}

/// Prints the banner once on mount. Renders nothing.
#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner(
    #[prop(into)] owner: String,
    #[prop(into)] tagline: String,
    #[prop(optional)] hints: Vec<String>,
) -> impl IntoView {
    Effect::new(move |_| {
        print_banner(&owner, &tagline, &hints);
        tracing::info!(owner = %owner, "site mounted");
    });

    view! {}
}
