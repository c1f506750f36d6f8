use crate::content::{EMAIL, GITHUB, LINKEDIN, OWNER, TAGLINE};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <p class="muted">{TAGLINE}</p>
            <div class="footer-links">
                <a href=GITHUB target="_blank" rel="noopener noreferrer">"GitHub"</a>
                <a href=LINKEDIN target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                <a href=format!("mailto:{EMAIL}")>"Email"</a>
            </div>
            <p class="footer-copyright">{format!("© {year} {OWNER}. All rights reserved.")}</p>
        </footer>
    }
}
