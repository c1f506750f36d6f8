use super::{About, Articles, Coding, Contact, Hero, Projects, Skills};
use folio_core::nav::{ActiveSection, NavDrawer};
use folio_core::sections::{Section, StudioSection};
use folio_core::SiteConfig;
use folio_ui::browser;
use folio_ui::components::Glyph;
use leptos::ev;
use leptos::prelude::*;

/// Header, drawer, indicator dots and the single visible panel.
#[component]
pub fn Layout(config: SiteConfig) -> impl IntoView {
    let active = RwSignal::new(ActiveSection::<StudioSection>::default());
    let drawer = RwSignal::new(NavDrawer::default());
    let current = Memo::new(move |_| active.with(|a| a.current()));
    let config = StoredValue::new(config);

    let select = Callback::new(move |section: StudioSection| {
        let mut state = active.get_untracked();
        let mut nav = drawer.get_untracked();
        let transition = nav.choose(&mut state, section);
        drawer.set(nav);
        if transition.is_changed() {
            active.set(state);
            browser::scroll_to_top();
        }
    });

    let scroll = window_event_listener(ev::scroll, move |_| {
        let mut nav = drawer.get_untracked();
        if nav.on_scroll(browser::scroll_y()) {
            drawer.set(nav);
        }
    });
    on_cleanup(move || scroll.remove());

    let is_open = move || drawer.with(|d| d.is_open());
    let nav_buttons = move |class: &'static str| {
        StudioSection::ALL
            .iter()
            .copied()
            .map(|section| {
                view! {
                    <button
                        type="button"
                        class=class
                        class:active=move || current.get() == section
                        on:click=move |_| select.run(section)
                    >
                        <Glyph icon=section.icon() />
                        <span>{section.label()}</span>
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="topbar">
            <button
                type="button"
                class="brand gradient-text"
                on:click=move |_| select.run(StudioSection::DEFAULT)
            >
                "Portfolio"
            </button>
            <nav class="topbar-links" aria-label="Sections">
                {nav_buttons("nav-link")}
            </nav>
            <button
                type="button"
                class="hamburger"
                class:open=is_open
                aria-label="Toggle navigation"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| drawer.update(|d| {
                    d.toggle();
                })
            >
                <span></span>
                <span></span>
                <span></span>
            </button>
        </header>

        <Show when=is_open>
            <div class="drawer-overlay" on:click=move |_| drawer.update(|d| d.close())></div>
        </Show>
        <nav class="drawer" class:open=is_open aria-label="Sections" aria-hidden=move || (!is_open()).to_string()>
            {nav_buttons("drawer-link")}
        </nav>

        <main>
            {move || {
                let section = current.get();
                let panel = match section {
                    StudioSection::Hero => view! { <Hero select /> }.into_any(),
                    StudioSection::About => view! { <About /> }.into_any(),
                    StudioSection::Projects => view! { <Projects /> }.into_any(),
                    StudioSection::Skills => view! { <Skills /> }.into_any(),
                    StudioSection::Articles => view! { <Articles /> }.into_any(),
                    StudioSection::Coding => view! { <Coding /> }.into_any(),
                    StudioSection::Contact => {
                        let contact = config.with_value(|c| c.contact.clone());
                        view! { <Contact endpoint=contact.endpoint access_key=contact.access_key /> }
                            .into_any()
                    }
                };
                view! { <div class="panel enter" id=section.id()>{panel}</div> }
            }}
        </main>

        <div class="indicator" aria-label="Section indicator">
            {StudioSection::ALL
                .iter()
                .copied()
                .map(|section| {
                    view! {
                        <button
                            type="button"
                            class="indicator-dot"
                            class:active=move || current.get() == section
                            title=section.label()
                            aria-label=section.label()
                            on:click=move |_| select.run(section)
                        ></button>
                    }
                })
                .collect_view()}
        </div>
    }
}
