//! Contact form wired to the `fetch` relay.

use crate::components::toast::{Toasts, use_toasts};
use crate::relay::FetchRelay;
use folio_core::contact::{ContactForm as FormState, Field, FieldError, FormRelay, Purpose, SubmitError};
use folio_core::notice::{Notice, Notify};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Routes form notices to the toast stack, or to the log when the page has
/// no [`Toaster`](crate::components::toast::Toaster).
struct ToastSink(Option<Toasts>);

impl Notify for ToastSink {
    fn notify(&mut self, notice: Notice) {
        match self.0 {
            Some(toasts) => toasts.push(notice),
            None => tracing::info!(title = %notice.title, "notice without toaster"),
        }
    }
}

fn value_of(form: RwSignal<FormState>, field: Field) -> impl Fn() -> String + Copy {
    move || form.with(|f| f.field(field).to_string())
}

fn set_on_input(form: RwSignal<FormState>, field: Field) -> impl Fn(ev::Event) + Copy {
    move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
}

#[component]
pub fn ContactForm(
    #[prop(into)] endpoint: String,
    #[prop(into)] access_key: String,
    /// Offer the fixed purpose list instead of a free-text subject.
    #[prop(default = true)]
    purpose_select: bool,
    /// Runs after the relay accepted a message.
    #[prop(optional)]
    on_sent: Option<Callback<()>>,
) -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let problem = RwSignal::new(None::<FieldError>);
    let relay = StoredValue::new(FetchRelay::new(endpoint));
    let access_key = StoredValue::new(access_key);
    let toasts = use_toasts();
    let submitting = move || form.with(|f| f.is_submitting());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let begun = form.try_update(|f| f.begin(&access_key.get_value()));
        let submission = match begun {
            Some(Ok(submission)) => submission,
            Some(Err(SubmitError::Invalid(err))) => {
                problem.set(Some(err));
                return;
            }
            Some(Err(err)) => {
                tracing::debug!(%err, "submit ignored");
                return;
            }
            None => return,
        };
        problem.set(None);

        let relay = relay.get_value();
        spawn_local(async move {
            let outcome = relay.post(&submission).await;
            let mut sink = ToastSink(toasts);
            let result = form.try_update(|f| f.finish(outcome, &mut sink));
            if let (Some(Ok(_)), Some(on_sent)) = (result, on_sent) {
                on_sent.run(());
            }
        });
    };

    let purpose_input = if purpose_select {
        view! {
            <select
                id="contact-purpose"
                name="purpose"
                required
                prop:value=value_of(form, Field::Purpose)
                on:change=set_on_input(form, Field::Purpose)
                disabled=submitting
            >
                <option value="" disabled>"Select a purpose"</option>
                {Purpose::ALL
                    .iter()
                    .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                    .collect_view()}
            </select>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                id="contact-purpose"
                name="subject"
                required
                placeholder="What's this about?"
                prop:value=value_of(form, Field::Purpose)
                on:input=set_on_input(form, Field::Purpose)
                disabled=submitting
            />
        }
        .into_any()
    };
    let purpose_label = if purpose_select { "Purpose" } else { "Subject" };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            <div class="form-row">
                <label for="contact-name">"Name"</label>
                <input
                    type="text"
                    id="contact-name"
                    name="name"
                    required
                    placeholder="Your name"
                    prop:value=value_of(form, Field::Name)
                    on:input=set_on_input(form, Field::Name)
                    disabled=submitting
                />
            </div>
            <div class="form-row">
                <label for="contact-email">"Email"</label>
                <input
                    type="email"
                    id="contact-email"
                    name="email"
                    required
                    placeholder="you@example.com"
                    prop:value=value_of(form, Field::Email)
                    on:input=set_on_input(form, Field::Email)
                    disabled=submitting
                />
            </div>
            <div class="form-row">
                <label for="contact-purpose">{purpose_label}</label>
                {purpose_input}
            </div>
            <div class="form-row">
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    required
                    placeholder="Tell me about your idea..."
                    prop:value=value_of(form, Field::Message)
                    on:input=set_on_input(form, Field::Message)
                    disabled=submitting
                ></textarea>
            </div>
            <Show when=move || problem.get().is_some()>
                <p class="form-error" role="alert">
                    {move || problem.get().map(|err| err.to_string())}
                </p>
            </Show>
            <button type="submit" class="btn btn-primary" disabled=submitting>
                {move || if submitting() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
