use crate::content::ARTICLES;
use folio_core::content::{Article, partition_featured};
use folio_core::sections::Icon;
use folio_ui::components::Glyph;
use leptos::prelude::*;

#[component]
fn ArticleCard(article: &'static Article, #[prop(optional)] featured: bool) -> impl IntoView {
    view! {
        <article class="card article-card" class:featured=featured>
            <div class="article-meta muted">
                <time datetime=article.published.iso()>{article.published_label()}</time>
                <span><Glyph icon=Icon::Clock />" "{article.read_time_label()}</span>
            </div>
            <h3>{article.title}</h3>
            <p class="muted">{article.excerpt}</p>
            <div class="chips">
                {article.tags.iter().map(|tag| view! { <span class="chip">{*tag}</span> }).collect_view()}
            </div>
            {article.url.map(|url| view! {
                <a href=url class="read-more">"Read Article →"</a>
            })}
        </article>
    }
}

#[component]
pub fn Articles() -> impl IntoView {
    let (featured, rest) = partition_featured(&ARTICLES);

    view! {
        <section class="page">
            <h2 class="section-title gradient-text">"Latest Articles"</h2>
            <p class="section-subtitle">
                "Thoughts, tutorials, and insights about web development, design, and technology"
            </p>
            <div class="grid featured-grid">
                {featured
                    .into_iter()
                    .map(|article| view! { <ArticleCard article featured=true /> })
                    .collect_view()}
            </div>
            <div class="grid">
                {rest.into_iter().map(|article| view! { <ArticleCard article /> }).collect_view()}
            </div>
        </section>
    }
}
