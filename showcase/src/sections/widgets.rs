// Small building blocks reused by several sections

use folio_core::content::{Highlight, Stat};
use folio_ui::components::Glyph;
use leptos::prelude::*;

/// Title and subtitle every section opens with.
#[component]
pub fn SectionHeader(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="section-header">
            <h2 class="section-title gradient-text">{title}</h2>
            <p class="section-subtitle">{subtitle}</p>
        </header>
    }
}

#[component]
pub fn StatRow(stats: &'static [Stat]) -> impl IntoView {
    view! {
        <div class="stat-row">
            {stats
                .iter()
                .map(|stat| {
                    view! {
                        <div class="card stat">
                            <Glyph icon=stat.icon />
                            <strong class="stat-value">{stat.value}</strong>
                            <span class="muted">{stat.label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HighlightGrid(items: &'static [Highlight]) -> impl IntoView {
    view! {
        <div class="grid">
            {items
                .iter()
                .map(|item| {
                    view! {
                        <div class="card highlight">
                            <span class="highlight-icon"><Glyph icon=item.icon /></span>
                            <h3>{item.title}</h3>
                            <p class="muted">{item.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Emoji callout closing a section.
#[component]
pub fn Callout(emoji: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="callout card">
            <span class="callout-emoji" aria-hidden="true">{emoji}</span>
            <div>
                <p class="callout-title">{title}</p>
                <p class="muted">{text}</p>
            </div>
        </div>
    }
}
