use crate::content::{CONTACT_INFO, SOCIAL_LINKS};
use folio_core::sections::{Icon, Section, ShowcaseSection};
use folio_ui::browser::{copy_to_clipboard, open_in_new_tab};
use folio_ui::components::{Confetti, ContactForm, Glyph, use_toasts};
use leptos::prelude::*;

use super::widgets::SectionHeader;

#[component]
pub fn Contact(#[prop(into)] endpoint: String, #[prop(into)] access_key: String) -> impl IntoView {
    let toasts = use_toasts();
    let bursts = RwSignal::new(0u32);
    let on_sent = Callback::new(move |()| bursts.update(|n| *n += 1));

    view! {
        <section id=ShowcaseSection::Contact.id() class="section">
            <Confetti bursts />
            <SectionHeader
                title="Get in Touch"
                subtitle="Let's discuss opportunities, collaborations, or just have a chat about AI and technology."
            />
            <p class="center"><span class="chip chip-current">"Open to internships & projects"</span></p>
            <div class="split">
                <div class="stack">
                    <div class="card">
                        <h3 class="card-title">"Contact Information"</h3>
                        {CONTACT_INFO
                            .iter()
                            .map(|entry| {
                                let action_icon = if entry.icon == Icon::Phone { Icon::MessageSquare } else { Icon::Mail };
                                view! {
                                    <div class="contact-entry">
                                        <span class="highlight-icon"><Glyph icon=entry.icon /></span>
                                        <div class="contact-text">
                                            <p class="muted">{entry.label}</p>
                                            <p>{entry.value}</p>
                                        </div>
                                        {entry.copy.map(|text| view! {
                                            <button
                                                type="button"
                                                class="btn btn-ghost icon-btn"
                                                title=format!("Copy {}", entry.label)
                                                on:click=move |_| copy_to_clipboard(text, entry.label, toasts)
                                            >
                                                "⧉"
                                            </button>
                                        })}
                                        {entry.href.map(|href| view! {
                                            <button
                                                type="button"
                                                class="btn btn-ghost icon-btn"
                                                title=entry.label
                                                on:click=move |_| open_in_new_tab(href)
                                            >
                                                <Glyph icon=action_icon />
                                            </button>
                                        })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="card">
                        <h3 class="card-title">"Connect With Me"</h3>
                        <div class="socials">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| view! {
                                    <a href=link.url target="_blank" rel="noopener noreferrer" title=link.label class="social">
                                        <Glyph icon=link.icon />
                                    </a>
                                })
                                .collect_view()}
                        </div>
                        <a href="#" target="_blank" class="btn btn-primary wide">
                            <Glyph icon=Icon::Download />
                            "Download Résumé"
                        </a>
                    </div>
                </div>
                <div class="card">
                    <h3 class="card-title">"Send a Message"</h3>
                    <ContactForm endpoint access_key on_sent />
                </div>
            </div>
        </section>
    }
}
