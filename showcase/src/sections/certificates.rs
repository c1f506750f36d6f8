use crate::content::{CERTIFICATES, CERTIFICATE_STATS};
use folio_core::sections::{Section, ShowcaseSection};
use folio_ui::browser::open_in_new_tab;
use folio_ui::components::Glyph;
use leptos::prelude::*;

use super::widgets::{Callout, SectionHeader, StatRow};

#[component]
pub fn Certificates() -> impl IntoView {
    view! {
        <section id=ShowcaseSection::Certificates.id() class="section">
            <SectionHeader
                title="Certificates"
                subtitle="Professional certifications that validate my expertise in AI/ML and data analysis."
            />
            <div class="grid">
                {CERTIFICATES
                    .iter()
                    .map(|cert| {
                        view! {
                            <article class="card certificate">
                                <div class="certificate-head">
                                    <span class="highlight-icon"><Glyph icon=cert.icon /></span>
                                    <div>
                                        <h3>{cert.title}</h3>
                                        <p class="certificate-issuer">{cert.issuer}</p>
                                        <span class="chip">{cert.category}</span>
                                    </div>
                                    {cert.verified.then(|| view! { <span class="chip chip-current">"Verified"</span> })}
                                </div>
                                <p class="muted">{cert.description}</p>
                                <h4 class="card-title">"Skills Covered:"</h4>
                                <div class="chips">
                                    {cert.skills.iter().map(|s| view! { <span class="chip">{*s}</span> }).collect_view()}
                                </div>
                                <button type="button" class="btn btn-ghost" on:click=|_| open_in_new_tab("#")>
                                    "View Certificate"
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
            <StatRow stats={&CERTIFICATE_STATS[..]} />
            <Callout
                emoji="📚"
                title="Continuous Learning"
                text="Currently pursuing additional certifications in GenAI and MLOps"
            />
        </section>
    }
}
