use crate::content::{GITHUB, LINKEDIN, OWNER};
use crate::spy::ScrollState;
use folio_core::nav::NavDrawer;
use folio_core::sections::{Icon, Section, ShowcaseSection};
use folio_ui::browser;
use folio_ui::components::Glyph;
use leptos::prelude::*;

/// Fixed sidebar with one entry per section; the entry under the spy line
/// is highlighted. On narrow screens it slides in from the menu button.
#[component]
pub fn Sidebar(scroll: ScrollState) -> impl IntoView {
    let drawer = RwSignal::new(NavDrawer::default());
    let is_open = move || drawer.with(|d| d.is_open());
    let scrolled = move || scroll.chrome.with(|c| c.scrolled);

    let go = move |section: ShowcaseSection| {
        drawer.update(|d| d.close());
        browser::scroll_into_view(section.id());
    };

    view! {
        <button
            type="button"
            class="menu-button"
            aria-label="Toggle navigation"
            aria-expanded=move || is_open().to_string()
            on:click=move |_| drawer.update(|d| {
                d.toggle();
            })
        >
            "☰"
        </button>
        <aside class="sidebar" class:scrolled=scrolled class:open=is_open>
            <h1 class="sidebar-logo gradient-text">{OWNER.split_whitespace().next().unwrap_or(OWNER)}</h1>
            <nav class="sidebar-nav" aria-label="Sections">
                {ShowcaseSection::ALL
                    .iter()
                    .copied()
                    .map(|section| {
                        view! {
                            <button
                                type="button"
                                class="sidebar-link"
                                class:active=move || scroll.active.get() == section
                                on:click=move |_| go(section)
                            >
                                <Glyph icon=section.icon() />
                                <span>{section.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="sidebar-footer">
                <div class="sidebar-socials">
                    <a href=GITHUB target="_blank" rel="noopener noreferrer" title="GitHub">
                        <Glyph icon=Icon::Github />
                    </a>
                    <a href=LINKEDIN target="_blank" rel="noopener noreferrer" title="LinkedIn">
                        <Glyph icon=Icon::Linkedin />
                    </a>
                    <a href=format!("mailto:{}", crate::content::EMAIL) title="Email">
                        <Glyph icon=Icon::Mail />
                    </a>
                </div>
                <a href="#" target="_blank" class="btn btn-primary sidebar-resume">
                    <Glyph icon=Icon::Download />
                    "Download Résumé"
                </a>
            </div>
        </aside>
    }
}

/// Round button that returns to the top once the page is scrolled far enough.
#[component]
pub fn BackToTop(scroll: ScrollState) -> impl IntoView {
    view! {
        <Show when=move || scroll.chrome.with(|c| c.back_to_top)>
            <button
                type="button"
                class="back-to-top"
                aria-label="Back to top"
                on:click=|_| browser::scroll_to_top()
            >
                "↑"
            </button>
        </Show>
    }
}
