use crate::content::{ACHIEVEMENTS, ACHIEVEMENT_STATS};
use folio_core::sections::{Section, ShowcaseSection};
use folio_ui::components::Glyph;
use leptos::prelude::*;

use super::widgets::{SectionHeader, StatRow};

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id=ShowcaseSection::Achievements.id() class="section">
            <SectionHeader
                title="Achievements"
                subtitle="Recognition for my work in AI/ML, computer vision, and innovative technology solutions."
            />
            <ol class="timeline">
                {ACHIEVEMENTS
                    .iter()
                    .enumerate()
                    .map(|(i, achievement)| {
                        view! {
                            <li class="timeline-item" class:timeline-right=i % 2 == 1>
                                <span class="timeline-dot" aria-hidden="true"></span>
                                <div class="card timeline-card">
                                    <span class="highlight-icon"><Glyph icon=achievement.icon /></span>
                                    <div>
                                        <div class="timeline-head">
                                            <h3>{achievement.title}</h3>
                                            <span class="chip">{achievement.year}</span>
                                        </div>
                                        <p class="muted">{achievement.detail}</p>
                                    </div>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
            <StatRow stats={&ACHIEVEMENT_STATS[..]} />
        </section>
    }
}
