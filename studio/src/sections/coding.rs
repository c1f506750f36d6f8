use crate::content::CODING_PROFILES;
use folio_core::sections::Icon;
use folio_ui::components::Glyph;
use leptos::prelude::*;

#[component]
pub fn Coding() -> impl IntoView {
    view! {
        <section class="page">
            <h2 class="section-title gradient-text">"Coding Profiles"</h2>
            <p class="section-subtitle">"Competitive programming and problem solving"</p>
            <div class="grid">
                {CODING_PROFILES
                    .iter()
                    .map(|profile| {
                        view! {
                            <a href=profile.url target="_blank" rel="noopener" class="card coding-card">
                                <span class="coding-badge" aria-hidden="true">{profile.badge}</span>
                                <h3>{profile.platform}</h3>
                                <p class="muted">"@"{profile.username}</p>
                                <dl class="coding-stats">
                                    <div>
                                        <dt><Glyph icon=Icon::BarChart />" Rating"</dt>
                                        <dd>{profile.rating}</dd>
                                    </div>
                                    <div>
                                        <dt><Glyph icon=Icon::Target />" Solved"</dt>
                                        <dd>{profile.solved}</dd>
                                    </div>
                                </dl>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
