use crate::content::PROJECTS;
use folio_core::content::{Project, partition_featured};
use folio_core::particles::ParticleVariant;
use folio_ui::components::ParticleBackground;
use leptos::prelude::*;

#[component]
fn ProjectCard(project: &'static Project, #[prop(optional)] featured: bool) -> impl IntoView {
    view! {
        <article class="card project-card" class:featured=featured>
            <div class="project-thumb" aria-hidden="true">{project.thumbnail.unwrap_or("💡")}</div>
            <h3>{project.title}</h3>
            {project.summary.iter().map(|line| view! { <p class="muted">{*line}</p> }).collect_view()}
            <div class="chips">
                {project.tech.iter().map(|tech| view! { <span class="chip">{*tech}</span> }).collect_view()}
            </div>
            <div class="project-links">
                {project.repo.map(|url| view! {
                    <a href=url target="_blank" rel="noopener" class="btn btn-ghost">"Code"</a>
                })}
                <a
                    href=project.demo.unwrap_or("#")
                    target="_blank"
                    rel="noopener"
                    class="btn btn-primary"
                >
                    {project.demo_label()}
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let (featured, rest) = partition_featured(&PROJECTS);

    view! {
        <section class="page particle-host">
            <ParticleBackground variant=ParticleVariant::Projects />
            <div class="content">
                <h2 class="section-title gradient-text">"Featured Projects"</h2>
                <p class="section-subtitle">
                    "Here are some of my recent projects that showcase my skills and passion for development"
                </p>
                <div class="grid featured-grid">
                    {featured
                        .into_iter()
                        .map(|project| view! { <ProjectCard project featured=true /> })
                        .collect_view()}
                </div>
                <h3 class="subheading">"Other Projects"</h3>
                <div class="grid">
                    {rest.into_iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
