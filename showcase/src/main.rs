// folio showcase: single-page scroll-spy portfolio, Leptos 0.8 CSR

mod content;
mod sections;
mod spy;
mod styles;

use folio_core::SiteConfig;
use folio_ui::components::{ConsoleBanner, ShortcutListener, Toaster};
use folio_ui::styles::BASE_CSS;
use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = SiteConfig::load_embedded("site.toml", include_str!("../site.toml"));
    folio_ui::telemetry::init(config.log_level());
    if !config.has_relay_key() {
        tracing::warn!("contact.access_key is empty; the relay will reject messages");
    }
    leptos::mount::mount_to_body(move || view! { <App config /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    let scroll = spy::track_scroll(config.scroll_offset);
    let stylesheet = format!("{BASE_CSS}\n{}", styles::SITE_CSS);
    let owner = if config.owner.is_empty() {
        content::OWNER.to_string()
    } else {
        config.owner.clone()
    };
    let api_user = config.profile.as_ref().map(|p| p.api_user.clone());

    view! {
        <style>{stylesheet}</style>
        <ConsoleBanner
            owner=owner.clone()
            tagline=content::TAGLINE
            hints=vec!["Press 'G' to visit my GitHub.".to_string()]
        />
        <Toaster>
            {config.shortcut.clone().map(|shortcut| view! {
                <ShortcutListener shortcut description="Opening GitHub profile..." />
            })}
            <BackgroundBlobs />
            <Sidebar scroll />
            <main class="main">
                <div class="column enter">
                    <Home owner api_user timing=config.typewriter />
                    <Projects />
                    <Skills />
                    <Achievements />
                    <About />
                    <Education />
                    <Certificates />
                    <SoftSkills />
                    <Languages />
                    <Contact endpoint=config.contact.endpoint.clone() access_key=config.contact.access_key.clone() />
                </div>
            </main>
            <BackToTop scroll />
            <Footer />
        </Toaster>
    }
}
