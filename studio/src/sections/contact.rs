use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use folio_core::particles::ParticleVariant;
use folio_ui::browser::copy_to_clipboard;
use folio_ui::components::{Confetti, ContactForm, Glyph, ParticleBackground, use_toasts};
use leptos::prelude::*;

#[component]
pub fn Contact(#[prop(into)] endpoint: String, #[prop(into)] access_key: String) -> impl IntoView {
    let bursts = RwSignal::new(0u32);
    let toasts = use_toasts();
    let on_sent = Callback::new(move |()| bursts.update(|n| *n += 1));
    // A blank relay key can never deliver.
    let form = if access_key.trim().is_empty() {
        view! {
            <p class="muted form-offline">
                "The message form is offline right now. Reach me directly through the details alongside."
            </p>
        }
        .into_any()
    } else {
        view! { <ContactForm endpoint access_key purpose_select=false on_sent /> }.into_any()
    };

    view! {
        <section class="page particle-host">
            <ParticleBackground variant=ParticleVariant::Contact />
            <Confetti bursts />
            <div class="content">
                <h2 class="section-title gradient-text">"Get In Touch"</h2>
                <p class="section-subtitle">
                    "Have a project in mind or just want to chat? I'd love to hear from you."
                </p>
                <div class="contact-grid">
                    <div class="card">
                        {form}
                    </div>
                    <div class="contact-side">
                        {CONTACT_INFO
                            .iter()
                            .map(|entry| {
                                let value = match entry.href {
                                    Some(href) => view! { <a href=href>{entry.value}</a> }.into_any(),
                                    None => view! { <span>{entry.value}</span> }.into_any(),
                                };
                                view! {
                                    <div class="card contact-entry">
                                        <Glyph icon=entry.icon />
                                        <div>
                                            <p class="muted">{entry.label}</p>
                                            {value}
                                        </div>
                                        {entry.copy.map(|text| view! {
                                            <button
                                                type="button"
                                                class="btn btn-ghost copy-btn"
                                                title="Copy"
                                                on:click=move |_| copy_to_clipboard(text, entry.label, toasts)
                                            >
                                                "Copy"
                                            </button>
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="socials">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a href=link.url target="_blank" rel="noopener" title=link.label class="social">
                                            <Glyph icon=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
