use crate::content::{GITHUB, PROJECTS, demo_label};
use folio_core::content::{Project, ProjectFilter};
use folio_core::sections::{Icon, Section, ShowcaseSection};
use folio_ui::browser::open_in_new_tab;
use folio_ui::components::Glyph;
use leptos::prelude::*;

use super::widgets::SectionHeader;

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card project-card">
            <div class="project-head">
                <div>
                    <h3>{project.title}</h3>
                    {project.category.map(|c| view! { <span class="chip chip-accent">{c}</span> })}
                </div>
                {project.featured.then(|| view! { <span class="chip chip-featured">"Featured"</span> })}
            </div>
            <ul class="project-points">
                {project.summary.iter().map(|point| view! { <li class="muted">{*point}</li> }).collect_view()}
            </ul>
            <div class="chips">
                {project.tech.iter().map(|tech| view! { <span class="chip">{*tech}</span> }).collect_view()}
            </div>
            <div class="project-links">
                {project.repo.map(|url| view! {
                    <button type="button" class="btn btn-primary" on:click=move |_| open_in_new_tab(url)>
                        <Glyph icon=Icon::Github />
                        "View Code"
                    </button>
                })}
                {project.demo.map(|url| view! {
                    <button type="button" class="btn btn-ghost" on:click=move |_| open_in_new_tab(url)>
                        {demo_label(project)}
                    </button>
                })}
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::All);
    let options = ProjectFilter::options(&PROJECTS);

    view! {
        <section id=ShowcaseSection::Projects.id() class="section">
            <SectionHeader
                title="Projects"
                subtitle="A showcase of intelligent systems I've built with AI/ML, computer vision, and full-stack technologies."
            />
            <div class="button-row">
                <button type="button" class="btn btn-ghost" on:click=move |_| open_in_new_tab(GITHUB)>
                    <Glyph icon=Icon::Github />
                    "GitHub Profile"
                </button>
            </div>
            <div class="button-row" role="tablist" aria-label="Filter projects">
                {options
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class="btn btn-ghost"
                                class:btn-active=move || filter.get() == option
                                aria-selected=move || (filter.get() == option).to_string()
                                on:click=move |_| filter.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid project-grid">
                {move || {
                    filter
                        .get()
                        .apply(&PROJECTS)
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
