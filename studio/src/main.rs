// folio studio: tab-switching portfolio, Leptos 0.8 CSR

mod content;
mod sections;
mod styles;

use folio_core::SiteConfig;
use folio_ui::components::{ConsoleBanner, Toaster};
use folio_ui::styles::BASE_CSS;
use leptos::prelude::*;
use sections::Layout;

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
    let owner = if config.owner.is_empty() {
        content::OWNER.to_string()
    } else {
        config.owner.clone()
    };
    let stylesheet = format!("{BASE_CSS}\n{}", styles::SITE_CSS);

    view! {
        <style>{stylesheet}</style>
        <ConsoleBanner
            owner=owner
            tagline=content::ROLE
            hints=vec!["Every tab is a Rust enum variant.".to_string()]
        />
        <Toaster>
            <Layout config />
        </Toaster>
    }
}
