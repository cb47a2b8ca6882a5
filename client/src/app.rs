//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one session subscription of the application: the observer
//! is installed here, before any route renders, and released when the root
//! owner is disposed. Pages and guards only read the resulting signal.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use fyp_supervisor::config::{ProviderConfig, SessionConfig};
use fyp_supervisor::notify::NoticeQueue;
use fyp_supervisor::route::Route as AppRoute;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{navbar::Navbar, protected_route::ProtectedRoute, toasts::Toasts};
use crate::net::provider::BrowserProvider;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, profile::ProfilePage};
use crate::state::session::{SessionState, install_session_observer};
use crate::util::theme;

/// Project used when no provider config was supplied at build time.
const DEV_PROJECT_ID: &str = "fyp-supervisor-dev";

/// Session settings from build-time environment, defaults on error.
fn resolve_session_config(lookup: impl Fn(&str) -> Option<String>) -> SessionConfig {
    SessionConfig::from_lookup(lookup).unwrap_or_else(|err| {
        log::warn!("session config rejected, using defaults: {err}");
        SessionConfig::default()
    })
}

/// Provider settings from a JSON blob, else from individual `FYP_*` keys.
/// With neither, the local emulator project is selected; an invalid source
/// yields an empty config that the provider reports as misconfigured.
fn resolve_provider_config(raw: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> ProviderConfig {
    let parsed = match raw {
        Some(raw) => ProviderConfig::from_json(raw),
        None if lookup("FYP_PROJECT_ID").is_some() => ProviderConfig::from_lookup(lookup),
        None => return ProviderConfig::emulator(DEV_PROJECT_ID),
    };
    parsed.unwrap_or_else(|err| {
        log::error!("provider config rejected: {err}");
        ProviderConfig::default()
    })
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "FYP_LANDING_PATH" => option_env!("FYP_LANDING_PATH"),
        "FYP_RESOLUTION_TIMEOUT_SECS" => option_env!("FYP_RESOLUTION_TIMEOUT_SECS"),
        "FYP_NOTICE_TIMEOUT_MS" => option_env!("FYP_NOTICE_TIMEOUT_MS"),
        "FYP_API_KEY" => option_env!("FYP_API_KEY"),
        "FYP_AUTH_DOMAIN" => option_env!("FYP_AUTH_DOMAIN"),
        "FYP_PROJECT_ID" => option_env!("FYP_PROJECT_ID"),
        "FYP_STORAGE_BUCKET" => option_env!("FYP_STORAGE_BUCKET"),
        "FYP_MESSAGING_SENDER_ID" => option_env!("FYP_MESSAGING_SENDER_ID"),
        "FYP_APP_ID" => option_env!("FYP_APP_ID"),
        _ => None,
    };
    value.map(str::to_owned)
}

/// Router segment text for `route`.
fn segment_path(route: AppRoute) -> &'static str {
    route.path().trim_start_matches('/')
}

fn segment(route: AppRoute) -> StaticSegment<&'static str> {
    StaticSegment(segment_path(route))
}

fn page(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage/> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage/> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage/> }.into_any(),
    }
}

/// The page for `route`, behind a `ProtectedRoute` when it needs a session.
fn route_view(route: AppRoute) -> AnyView {
    if route.requires_session() {
        view! { <ProtectedRoute>{move || page(route)}</ProtectedRoute> }.into_any()
    } else {
        page(route)
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    theme::apply(theme::read_preference());

    let session_config = resolve_session_config(build_env);
    let provider = BrowserProvider::new(resolve_provider_config(option_env!("FYP_PROVIDER_CONFIG"), build_env));
    let session = RwSignal::new(SessionState::default());
    let notices = RwSignal::new(NoticeQueue::new());

    // Subscribe before restoring so the first emission is observed.
    install_session_observer(&provider, session, session_config.resolution_timeout);
    provider.restore();

    provide_context(session);
    provide_context(notices);
    provide_context(session_config);
    provide_context(StoredValue::new_local(provider));

    view! {
        <Title text="FYPSupervisor"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=segment(AppRoute::Login) view=|| route_view(AppRoute::Login)/>
                    <Route path=segment(AppRoute::Dashboard) view=|| route_view(AppRoute::Dashboard)/>
                    <Route path=segment(AppRoute::Profile) view=|| route_view(AppRoute::Profile)/>
                </Routes>
            </main>
            <Toasts/>
        </Router>
    }
}
