use crate::relay::fetch_avatar;
use folio_core::profile::Avatar;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Profile picture, fetched once on mount. Shows the owner's initial until
/// (or instead of) the image.
#[component]
pub fn ProfileAvatar(
    #[prop(into)] name: String,
    /// Account on the profile API; `None` keeps the placeholder.
    api_user: Option<String>,
) -> impl IntoView {
    let avatar = RwSignal::new(Avatar::placeholder(&name));

    if let Some(user) = api_user {
        let display_name = name.clone();
        spawn_local(async move {
            let fetched = fetch_avatar(&user, &display_name).await;
            let _ = avatar.try_set(fetched);
        });
    }

    let alt = StoredValue::new(format!("{name} avatar"));
    view! {
        <div class="avatar">
            {move || match avatar.get() {
                Avatar::Image(url) => {
                    view! { <img src=url alt=alt.get_value() class="avatar-image" /> }.into_any()
                }
                Avatar::Placeholder(initial) => {
                    view! { <span class="avatar-initial">{initial.to_string()}</span> }.into_any()
                }
            }}
        </div>
    }
}
