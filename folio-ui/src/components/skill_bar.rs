use folio_core::content::Skill;
use leptos::prelude::*;
use std::time::Duration;

const FILL_DELAY: Duration = Duration::from_millis(300);

/// Labelled proficiency bar that fills once after mounting.
#[component]
pub fn SkillBar(skill: Skill) -> impl IntoView {
    let width = RwSignal::new("0%".to_string());
    let target = skill.level.width_css();
    set_timeout(
        move || {
            let _ = width.try_set(target);
        },
        FILL_DELAY,
    );

    view! {
        <div class="skill-bar">
            <div class="skill-bar-head">
                <span class="skill-name">{skill.name}</span>
                <span class="skill-level">{skill.level.width_css()}</span>
            </div>
            <div
                class="skill-track"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=skill.level.value().to_string()
            >
                <div class="skill-fill" style:width=move || width.get()></div>
            </div>
        </div>
    }
}
