//! Dashboard page: the authenticated landing route.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use fyp_supervisor::route::Route;
use fyp_supervisor::session::Principal;
use leptos::prelude::*;

use crate::state::session::SessionState;

/// Welcome line for the signed-in supervisor.
#[must_use]
pub fn greeting(principal: &Principal) -> String {
    format!("Welcome back, {}", principal.label())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="dashboard">
            <h1 class="dashboard__title">{move || session.with(|s| s.identity().map(greeting)).unwrap_or_default()}</h1>
            <p class="dashboard__subtitle">"Your supervision overview."</p>
            <a href=Route::Profile.path() class="dashboard__link">"View profile"</a>
        </section>
    }
}
