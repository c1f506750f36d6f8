use crate::content::{SOFT_SKILLS, STRENGTHS};
use folio_core::sections::{Icon, Section, ShowcaseSection};
use folio_ui::components::Glyph;
use leptos::prelude::*;

use super::widgets::{HighlightGrid, SectionHeader};

#[component]
pub fn SoftSkills() -> impl IntoView {
    view! {
        <section id=ShowcaseSection::SoftSkills.id() class="section">
            <SectionHeader
                title="Soft Skills"
                subtitle="The human skills that complement my technical expertise and drive successful collaborations."
            />
            <HighlightGrid items={&SOFT_SKILLS[..]} />
            <h3 class="subheading">"Additional Strengths"</h3>
            <div class="button-row">
                {STRENGTHS
                    .iter()
                    .map(|(name, icon)| view! {
                        <span class="card strength"><Glyph icon=*icon />" "{*name}</span>
                    })
                    .collect_view()}
            </div>
            <div class="split">
                <div class="card">
                    <h3 class="card-title"><Glyph icon=Icon::Users />" Team Collaboration"</h3>
                    <p class="muted">
                        "Strong track record of working effectively in cross-functional teams, leading "
                        "technical discussions, and mentoring junior developers. My communication skills "
                        "help bridge the gap between technical complexity and business value."
                    </p>
                </div>
                <div class="card">
                    <h3 class="card-title"><Glyph icon=Icon::Target />" Project Success"</h3>
                    <p class="muted">
                        "My combination of technical skills and soft skills has consistently delivered "
                        "successful projects. I focus on understanding stakeholder needs, managing "
                        "expectations, and delivering solutions that create real business impact."
                    </p>
                </div>
            </div>
            <blockquote class="card quote">
                "Technical skills get you in the door, but soft skills determine how far you'll go. "
                "I believe in building technology that serves people, not the other way around."
            </blockquote>
        </section>
    }
}
