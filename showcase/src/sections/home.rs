use crate::content::{TECH_CHIPS, TYPEWRITER_PHRASES};
use folio_core::sections::{Section, ShowcaseSection};
use folio_core::typewriter::TypewriterTiming;
use folio_ui::browser::scroll_into_view;
use folio_ui::components::{CopyChip, ProfileAvatar, TypewriterText};
use leptos::prelude::*;

#[component]
pub fn Home(
    owner: String,
    api_user: Option<String>,
    timing: TypewriterTiming,
) -> impl IntoView {
    let phrases = TYPEWRITER_PHRASES.iter().map(|p| p.to_string()).collect();
    let projects = ShowcaseSection::Projects.id();
    let contact = ShowcaseSection::Contact.id();

    view! {
        <section id=ShowcaseSection::Home.id() class="section home">
            <div class="home-avatar">
                <ProfileAvatar name=owner.clone() api_user=api_user />
                <span class="avatar-ring" aria-hidden="true"></span>
            </div>
            <h1 class="home-title">
                "Hello, I'm " <span class="gradient-text">{owner}</span>
            </h1>
            <h2 class="home-role muted">
                <TypewriterText phrases timing />
            </h2>
            <p class="home-pitch muted">
                "\"I build intelligent, data-driven products with LLMs, diffusion models, and "
                "real-time vision systems.\""
            </p>
            <div class="home-actions">
                <button type="button" class="btn btn-primary" on:click=move |_| scroll_into_view(projects)>
                    "View Projects"
                </button>
                <button type="button" class="btn btn-ghost" on:click=move |_| scroll_into_view(contact)>
                    "Get in Touch"
                </button>
            </div>
            <div class="chips home-chips">
                {TECH_CHIPS.iter().map(|tech| view! { <CopyChip text=*tech /> }).collect_view()}
            </div>
            <button
                type="button"
                class="scroll-hint"
                aria-label="Scroll to projects"
                on:click=move |_| scroll_into_view(projects)
            >
                "⌄"
            </button>
        </section>
    }
}
