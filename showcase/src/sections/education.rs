use crate::content::EDUCATION;
use folio_core::content::StudyStatus;
use folio_core::sections::{Section, ShowcaseSection};
use folio_ui::components::Glyph;
use leptos::prelude::*;

use super::widgets::SectionHeader;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id=ShowcaseSection::Education.id() class="section">
            <SectionHeader
                title="Education"
                subtitle="My academic journey in artificial intelligence, data science, and foundational studies."
            />
            <div class="stack">
                {EDUCATION
                    .iter()
                    .map(|entry| {
                        view! {
                            <div class="card education-card">
                                <span class="highlight-icon"><Glyph icon=entry.icon /></span>
                                <div class="education-body">
                                    <div class="education-head">
                                        <h3>{entry.degree}</h3>
                                        <span
                                            class="chip"
                                            class:chip-current=entry.status == StudyStatus::Current
                                        >
                                            {entry.status.label()}
                                        </span>
                                    </div>
                                    <p class="education-institution">{entry.institution}</p>
                                    <p class="muted">
                                        <strong>{entry.grade}</strong>" · "{entry.period}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
