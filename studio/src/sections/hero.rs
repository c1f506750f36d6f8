use crate::content::{HERO_LINKS, OWNER};
use folio_core::orbit::IconKind;
use folio_core::particles::ParticleVariant;
use folio_core::sections::StudioSection;
use folio_ui::components::{FloatingIcon, Glyph, ParticleBackground};
use leptos::prelude::*;

#[component]
pub fn Hero(select: Callback<StudioSection>) -> impl IntoView {
    view! {
        <section class="hero particle-host">
            <ParticleBackground variant=ParticleVariant::Hero />
            <FloatingIcon kind=IconKind::React class="orbit orbit-left" />
            <FloatingIcon kind=IconKind::ThreeJs class="orbit orbit-right" />
            <FloatingIcon kind=IconKind::JavaScript class="orbit orbit-bottom" />
            <div class="content hero-content">
                <p class="hero-kicker">"Welcome to my Portfolio"</p>
                <h1 class="hero-name gradient-text">{OWNER}</h1>
                <p class="hero-description muted">
                    "Full Stack Developer & UI/UX Designer creating beautiful digital "
                    "experiences with modern technologies"
                </p>
                <div class="hero-actions">
                    <button
                        type="button"
                        class="btn btn-primary"
                        on:click=move |_| select.run(StudioSection::Projects)
                    >
                        "View My Work"
                    </button>
                    <button
                        type="button"
                        class="btn btn-ghost"
                        on:click=move |_| select.run(StudioSection::Contact)
                    >
                        "Get In Touch"
                    </button>
                </div>
                <div class="hero-links">
                    {HERO_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.url class="hero-link" title=link.label>
                                    <Glyph icon=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
