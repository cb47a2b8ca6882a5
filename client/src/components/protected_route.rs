//! Route wrapper that only renders its children for an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each protected route owns its own `RouteGuard`. The guard reads the shared
//! session signal, so a sign-out or external revocation while the view is
//! mounted unmounts the children and redirects on the next evaluation.
//! Children are only constructed through `RouteGuard::render`.

use fyp_supervisor::config::SessionConfig;
use fyp_supervisor::guard::Rendered;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_route_guard;

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<SessionConfig>();
    let route_guard = install_route_guard(session, config.landing_path, use_navigate());

    move || {
        let current = route_guard.get();
        match current.render(|_| children()) {
            Rendered::Loading => view! {
                <div class="route-guard route-guard--pending" aria-busy="true">
                    <span class="route-guard__spinner"></span>
                    "Checking your session..."
                </div>
            }
            .into_any(),
            Rendered::View(view) => view.into_any(),
            Rendered::Redirecting(_) => ().into_any(),
            Rendered::Failed(reason) => view! {
                <div class="route-guard route-guard--failed" role="alert">
                    <p>"We couldn't confirm your session."</p>
                    <p class="route-guard__reason">{reason}</p>
                    <a href=current.landing().to_owned()>"Go to login"</a>
                </div>
            }
            .into_any(),
        }
    }
}
