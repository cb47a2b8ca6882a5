//! Top navigation bar with session-aware links and the log-out button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Links are derived from the session status alone. The log-out button runs
//! the shared `SignOutAction`, which owns redirect, notice and in-flight
//! behavior; the `signing_out` signal only mirrors the action's flag.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use std::rc::Rc;

use fyp_supervisor::config::SessionConfig;
use fyp_supervisor::notify::NoticeQueue;
use fyp_supervisor::route::Route;
use fyp_supervisor::session::SessionStatus;
use fyp_supervisor::sign_out::SignOutAction;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::provider::BrowserProvider;
use crate::state::notices::SignalNotifier;
use crate::state::session::SessionState;

/// Routes offered in the navigation for `status`.
#[must_use]
pub fn nav_links(status: &SessionStatus) -> Vec<Route> {
    match status {
        SessionStatus::Authenticated(_) => vec![Route::Dashboard, Route::Profile],
        SessionStatus::Pending => Vec::new(),
        SessionStatus::Unauthenticated | SessionStatus::Failed(_) => vec![Route::Login],
    }
}

/// Whether `route` is the view at `pathname`.
#[must_use]
pub fn is_active(route: Route, pathname: &str) -> bool {
    Route::from_path(pathname) == Some(route)
}

#[must_use]
pub fn show_logout(status: &SessionStatus) -> bool {
    status.is_authenticated()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let config = expect_context::<SessionConfig>();
    let provider = expect_context::<StoredValue<BrowserProvider, LocalStorage>>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let navigator = move |path: &str| navigate(path, NavigateOptions::default());
    let action = SignOutAction::new(
        Rc::new(provider.get_value()),
        Rc::new(navigator),
        Rc::new(SignalNotifier::new(notices, config.notice_timeout)),
    )
    .with_landing(config.landing_path);
    let action = StoredValue::new_local(action);

    let menu_open = RwSignal::new(false);
    let signing_out = RwSignal::new(false);

    let on_logout = move |_| {
        menu_open.set(false);
        let invocation = action.with_value(SignOutAction::invoke);
        signing_out.set(action.with_value(SignOutAction::is_pending));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = invocation.await;
            log::debug!("log-out finished: {outcome:?}");
            if let Some(pending) = action.try_with_value(SignOutAction::is_pending) {
                signing_out.try_set(pending);
            }
        });
        #[cfg(not(feature = "csr"))]
        drop(invocation);
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">"FYPSupervisor"</a>
            <button
                class="navbar__menu-toggle"
                aria-label="Toggle navigation"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                <For
                    each=move || session.with(|s| nav_links(&s.status))
                    key=|route| *route
                    children=move |route: Route| {
                        view! {
                            <a
                                href=route.path()
                                class="navbar__link"
                                class:navbar__link--active=move || pathname.with(|path| is_active(route, path))
                                on:click=move |_| menu_open.set(false)
                            >
                                {route.title()}
                            </a>
                        }
                    }
                />
                <Show when=move || session.with(|s| show_logout(&s.status))>
                    <span class="navbar__user">{move || session.with(SessionState::user_label).unwrap_or_default()}</span>
                    <button
                        class="btn navbar__logout"
                        on:click=on_logout
                        disabled=move || signing_out.get()
                        title="Logout"
                    >
                        {move || if signing_out.get() { "Logging out..." } else { "Logout" }}
                    </button>
                </Show>
            </div>
        </nav>
    }
}
