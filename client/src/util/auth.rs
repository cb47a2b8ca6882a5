//! Shared route-guard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical redirect behavior, so the effect
//! that feeds session changes into a `RouteGuard` lives here. The guard
//! itself is the only state: components render through `RouteGuard::render`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use fyp_supervisor::guard::{self, GuardState, RouteGuard};
use fyp_supervisor::route::Navigator;
use fyp_supervisor::session::SessionStatus;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Drive a fresh `RouteGuard` from `session` and expose it as a signal.
///
/// A session that is already resolved to a non-redirecting state is applied
/// immediately so the first render skips the loading view. Redirects are
/// only issued from the effect, after mount. A session revoked while the view
/// is mounted redirects to `landing` on the next evaluation.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, landing: String, navigate: F) -> RwSignal<RouteGuard>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut initial = RouteGuard::new(landing);
    let status = session.with_untracked(|s| s.status.clone());
    if !matches!(guard::evaluate(&status, initial.landing()), GuardState::Redirecting { .. }) {
        initial.apply(&status, &|_: &str| {});
    }
    let route_guard = RwSignal::new(initial);

    Effect::new(move || {
        let status = session.with(|s| s.status.clone());
        let navigate = navigate.clone();
        let navigator = move |path: &str| navigate(path, NavigateOptions::default());
        sync_route_guard(route_guard, &status, &navigator);
    });

    route_guard
}

/// Apply `status` to the guard held in `route_guard`, notifying readers only
/// when the guard state actually changes.
pub fn sync_route_guard(route_guard: RwSignal<RouteGuard>, status: &SessionStatus, navigator: &dyn Navigator) {
    let Some(mut next) = route_guard.try_get_untracked() else {
        return;
    };
    let before = next.state().clone();
    if *next.apply(status, navigator) != before {
        route_guard.set(next);
    }
}
