use crate::animation::FrameLoop;
use folio_core::orbit::{IconKind, OrbitMotion};
use leptos::prelude::*;

/// Slowly spinning, bobbing technology badge.
#[component]
pub fn FloatingIcon(kind: IconKind, #[prop(optional, into)] class: String) -> impl IntoView {
    let transform = RwSignal::new(OrbitMotion::default().transform());
    let mut motion = OrbitMotion::default();
    let mut elapsed_secs = 0.0;

    FrameLoop::start(move |frames| {
        elapsed_secs += frames / 60.0;
        motion.advance(elapsed_secs, frames);
        transform.try_set(motion.transform()).is_none()
    });

    let solid = kind.solid();
    view! {
        <div
            class=format!("floating-icon {class}")
            style=format!("--solid-color: {}", kind.color())
            aria-hidden="true"
        >
            <div
                class=format!("solid {}", solid.class())
                style:transform=move || transform.get()
            ></div>
        </div>
    }
}
