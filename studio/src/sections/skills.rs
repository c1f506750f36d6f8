use crate::content::SKILL_GROUPS;
use folio_core::particles::ParticleVariant;
use folio_ui::components::{FloatingIcon, Glyph, ParticleBackground, SkillBar};
use leptos::prelude::*;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="page particle-host">
            <ParticleBackground variant=ParticleVariant::Skills />
            <div class="content">
                <h2 class="section-title gradient-text">"Skills & Expertise"</h2>
                <p class="section-subtitle">
                    "Technologies and tools I use to bring ideas to life"
                </p>
                <div class="grid skill-groups">
                    {SKILL_GROUPS
                        .iter()
                        .map(|group| {
                            view! {
                                <div class="card skill-group">
                                    {group.badge.map(|kind| view! { <FloatingIcon kind class="skill-badge" /> })}
                                    <h3 class="skill-group-title">
                                        {group.icon.map(|icon| view! { <Glyph icon /> })}
                                        {group.title}
                                        <span class="skill-average muted">
                                            {format!("avg {}", group.average().width_css())}
                                        </span>
                                    </h3>
                                    {group.skills.iter().map(|skill| view! { <SkillBar skill=*skill /> }).collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
