use crate::content::{COMMUNICATION, LANGUAGES};
use folio_core::content::Skill;
use folio_core::sections::{Section, ShowcaseSection};
use folio_ui::components::SkillBar;
use leptos::prelude::*;

use super::widgets::{Callout, HighlightGrid, SectionHeader};

#[component]
pub fn Languages() -> impl IntoView {
    view! {
        <section id=ShowcaseSection::Languages.id() class="section">
            <SectionHeader
                title="Languages"
                subtitle="Multilingual communication abilities that enable effective collaboration across diverse teams and cultures."
            />
            <div class="grid">
                {LANGUAGES
                    .iter()
                    .map(|language| {
                        let fluent = language.proficiency == "Fluent";
                        let bar = Skill { name: "Proficiency", level: language.level };
                        view! {
                            <div class="card language">
                                <span class="language-flag" aria-hidden="true">{language.flag}</span>
                                <h3>{language.name}</h3>
                                <span class="chip" class:chip-current=fluent>{language.proficiency}</span>
                                <SkillBar skill=bar />
                                <p class="muted">{language.description}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <h3 class="subheading">"Communication Strengths"</h3>
            <HighlightGrid items={&COMMUNICATION[..]} />
            <Callout
                emoji="🌍"
                title="Global Perspective"
                text="Ready to collaborate with international teams and diverse cultures"
            />
        </section>
    }
}
