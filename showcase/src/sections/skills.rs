use crate::content::SKILL_GROUPS;
use folio_core::content::{SkillView, all_skills, cloud_font_size};
use folio_core::sections::{Section, ShowcaseSection};
use folio_ui::browser::copy_to_clipboard;
use folio_ui::components::{CopyChip, SkillBar, use_toasts};
use leptos::prelude::*;

use super::widgets::SectionHeader;

#[component]
fn SkillGrid() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="grid">
            {SKILL_GROUPS
                .iter()
                .map(|group| {
                    view! {
                        <div class="card">
                            <h3 class="skill-group-title">{group.title}</h3>
                            {group
                                .skills
                                .iter()
                                .map(|skill| {
                                    let name = skill.name;
                                    view! {
                                        <div
                                            class="skill-copy"
                                            title=format!("Copy {name}")
                                            on:click=move |_| copy_to_clipboard(name, name, toasts)
                                        >
                                            <SkillBar skill=*skill />
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn SkillCloud() -> impl IntoView {
    view! {
        <div class="cloud">
            {all_skills(&SKILL_GROUPS)
                .into_iter()
                .map(|skill| {
                    let size = format!("font-size: {}", cloud_font_size(skill.level));
                    view! { <CopyChip text=skill.name style=size /> }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let mode = RwSignal::new(SkillView::Grid);

    view! {
        <section id=ShowcaseSection::Skills.id() class="section">
            <SectionHeader
                title="Skills"
                subtitle="Technologies and frameworks I use to build intelligent systems and data-driven solutions."
            />
            <div class="button-row">
                {[SkillView::Grid, SkillView::Cloud]
                    .into_iter()
                    .map(|view_mode| {
                        view! {
                            <button
                                type="button"
                                class="btn btn-ghost"
                                class:btn-active=move || mode.get() == view_mode
                                on:click=move |_| mode.set(view_mode)
                            >
                                {view_mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match mode.get() {
                SkillView::Grid => view! { <SkillGrid /> }.into_any(),
                SkillView::Cloud => view! { <SkillCloud /> }.into_any(),
            }}
        </section>
    }
}
