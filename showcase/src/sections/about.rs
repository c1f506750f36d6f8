use crate::content::{BIO, HIGHLIGHTS, HOBBIES};
use folio_core::sections::{Icon, Section, ShowcaseSection};
use folio_ui::components::Glyph;
use leptos::prelude::*;

use super::widgets::{Callout, HighlightGrid, SectionHeader};

#[component]
pub fn About() -> impl IntoView {
    let (lead, rest) = BIO.split_first().map_or(("", &[][..]), |(lead, rest)| (*lead, rest));

    view! {
        <section id=ShowcaseSection::About.id() class="section">
            <SectionHeader
                title="About Me"
                subtitle="Passionate about building intelligent systems that make a difference."
            />
            <div class="split">
                <div class="stack">
                    <div class="card prose">
                        <p class="lead">{lead}</p>
                        {rest.iter().map(|p| view! { <p class="muted">{*p}</p> }).collect_view()}
                    </div>
                    <div class="card">
                        <h3 class="card-title"><Glyph icon=Icon::Lightbulb />" Interests & Hobbies"</h3>
                        <ul class="bullets">
                            {HOBBIES.iter().map(|h| view! { <li class="muted">{*h}</li> }).collect_view()}
                        </ul>
                    </div>
                </div>
                <HighlightGrid items={&HIGHLIGHTS[..]} />
            </div>
            <Callout
                emoji="🚀"
                title="Fun Fact"
                text="I believe the best AI solutions are those that feel invisible to users"
            />
        </section>
    }
}
