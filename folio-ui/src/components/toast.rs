//! Toast stack shared through Leptos context.

use folio_core::notice::{Notice, Notify, ToastQueue};
use leptos::prelude::*;
use std::time::Duration;

/// How long a toast stays up before dismissing itself.
pub const TOAST_TTL: Duration = Duration::from_millis(4000);

/// Handle to the page's toast queue. Cheap to copy into closures.
#[derive(Debug, Clone, Copy)]
pub struct Toasts(RwSignal<ToastQueue>);

impl Toasts {
    pub fn push(&self, notice: Notice) {
        let queue = self.0;
        let Some(id) = queue.try_update(|q| q.push(notice)) else {
            return;
        };
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            TOAST_TTL,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.0.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Notify for Toasts {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Toasts registered by an ancestor [`Toaster`], if any.
pub fn use_toasts() -> Option<Toasts> {
    use_context::<Toasts>()
}

/// Provides [`Toasts`] to `children` and renders the stack above them.
#[component]
pub fn Toaster(children: Children) -> impl IntoView {
    let queue = RwSignal::new(ToastQueue::default());
    let toasts = Toasts(queue);
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || {
                    queue.with(|q| q.iter().map(|(id, n)| (id, n.clone())).collect::<Vec<_>>())
                }
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    view! {
                        <div class=format!("toast {}", notice.tone.class())>
                            <div class="toast-body">
                                <p class="toast-title">{notice.title}</p>
                                <p class="toast-description">{notice.description}</p>
                            </div>
                            <button
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
