use crate::content::{BIO, STATS};
use folio_ui::components::Glyph;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="page">
            <h2 class="section-title gradient-text">"About Me"</h2>
            <div class="about-grid">
                <div class="about-bio">
                    {BIO.iter().map(|paragraph| view! { <p class="muted">{*paragraph}</p> }).collect_view()}
                </div>
                <div class="stat-grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="card stat">
                                    <Glyph icon=stat.icon />
                                    <strong class="stat-value gradient-text">{stat.value}</strong>
                                    <span class="muted">{stat.label}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
