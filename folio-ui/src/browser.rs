//! Thin wrappers over `web_sys` for the handful of DOM calls the sites make.
//!
//! Every helper degrades to a no-op (with a `warn!`) when the browser API is
//! missing; nothing here panics.

use folio_core::notice::Notice;
use folio_core::scroll_spy::SectionBounds;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::components::toast::Toasts;

/// Milliseconds since page load.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

/// Seed for the decorative simulations.
pub fn random_seed() -> u64 {
    let hi = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    let lo = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (hi << 32) | lo
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

pub fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default();
    (width, height)
}

/// Viewport-relative bounds of the element with `id`.
pub fn element_bounds(id: &str) -> Option<SectionBounds> {
    let element = web_sys::window()?.document()?.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(SectionBounds::new(rect.top(), rect.bottom()))
}

pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll the element with `id` into view. Unknown ids are ignored.
pub fn scroll_into_view(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => tracing::debug!(id, "scroll target not in document"),
    }
}

pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().map(|w| w.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(_))) {
        tracing::warn!(url, "could not open new tab");
    }
}

/// Whether keyboard focus sits in something the visitor types into.
pub fn is_editable_target(target: Option<web_sys::EventTarget>) -> bool {
    let Some(element) = target.and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) else {
        return false;
    };
    matches!(
        element.tag_name().to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    ) || element.is_content_editable()
}

/// Put `text` on the clipboard and toast on success.
///
/// The write is asynchronous; failures (permissions, insecure context) are
/// logged only.
pub fn copy_to_clipboard(text: &str, label: &str, toasts: Option<Toasts>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(text);
    let label = label.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                if let Some(toasts) = toasts {
                    toasts.push(Notice::copied(&label));
                }
            }
            Err(err) => tracing::warn!(?err, label = %label, "clipboard write failed"),
        }
    });
}
