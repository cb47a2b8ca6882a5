//! Profile page: identity details and the theme toggle.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use fyp_supervisor::session::Principal;
use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::theme::{self, Theme};

/// Label/value rows shown for `principal`; absent fields are skipped.
#[must_use]
pub fn profile_rows(principal: &Principal) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    if let Some(name) = principal.display_name.as_deref().filter(|n| !n.trim().is_empty()) {
        rows.push(("Name", name.to_owned()));
    }
    if let Some(email) = &principal.email {
        rows.push(("Email", email.clone()));
    }
    rows.push(("User ID", principal.uid.clone()));
    rows
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let theme = RwSignal::new(theme::read_preference());
    theme::apply(theme.get_untracked());

    let rows = move || session.with(|s| s.identity().map(profile_rows).unwrap_or_default());
    let photo = move || session.with(|s| s.identity().and_then(|p| p.photo_url.clone()));

    view! {
        <section class="profile">
            <h1 class="profile__title">"Profile"</h1>
            {move || photo().map(|src| view! { <img class="profile__photo" src=src alt="Profile photo"/> })}
            <dl class="profile__fields">
                {move || {
                    rows()
                        .into_iter()
                        .map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()
                }}
            </dl>
            <button
                class="btn profile__theme"
                title="Toggle dark mode"
                on:click=move |_| theme.update(|t| *t = theme::toggle(*t))
            >
                {move || theme.get().toggle_icon()}
                {move || if theme.get() == Theme::Dark { " Light mode" } else { " Dark mode" }}
            </button>
        </section>
    }
}
