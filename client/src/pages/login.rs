//! Login page: email + display-name sign-in against the browser provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing view for unauthenticated users and the log-out
//! redirect target. It never redirects on mount: only a sign-in completed
//! while the page is shown moves the user to the dashboard, so a sign-out
//! that lands here cannot bounce back before the observer catches up.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use fyp_supervisor::config::SessionConfig;
use fyp_supervisor::notify::{NoticeQueue, Notifier};
use fyp_supervisor::route::Route;
use fyp_supervisor::session::{Principal, SessionStatus};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::provider::BrowserProvider;
use crate::state::notices::SignalNotifier;
use crate::state::session::SessionState;

/// Build the principal for a local sign-in from raw form input.
pub fn validate_sign_in(email: &str, display_name: &str) -> Result<Principal, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {}
        _ => return Err("Enter a valid email address."),
    }

    let mut principal = Principal::new(format!("local:{}", email.to_ascii_lowercase())).with_email(email);
    let display_name = display_name.trim();
    if !display_name.is_empty() {
        principal = principal.with_display_name(display_name);
    }
    Ok(principal)
}

/// Whether the sign-in form should be offered. A misconfigured provider
/// could never report the resulting session, so the form is withheld.
#[must_use]
pub fn sign_in_available(status: &SessionStatus, provider_configured: bool) -> bool {
    provider_configured && !status.is_pending() && !status.is_authenticated()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let provider = expect_context::<StoredValue<BrowserProvider, LocalStorage>>();
    let notices = expect_context::<RwSignal<NoticeQueue>>();
    let config = expect_context::<SessionConfig>();
    let notifier = SignalNotifier::new(notices, config.notice_timeout);
    let provider_configured = provider.with_value(|p| p.config().validate().is_ok());
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Only a false -> true transition observed on this page redirects.
    Effect::new(move |was_authenticated: Option<bool>| {
        let authenticated = session.with(|s| s.status.is_authenticated());
        if was_authenticated == Some(false) && authenticated {
            navigate(Route::Dashboard.path(), NavigateOptions::default());
        }
        authenticated
    });

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_sign_in(&email.get_untracked(), &display_name.get_untracked()) {
            Ok(principal) => {
                let label = principal.label().to_owned();
                match provider.with_value(|p| p.sign_in(principal)) {
                    Ok(()) => {
                        info.set(String::new());
                        notifier.info(&format!("Signed in as {label}"));
                    }
                    Err(err) => info.set(err.to_string()),
                }
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    let signed_in = move || session.with(|s| s.status.is_authenticated());
    let can_sign_in = move || session.with(|s| sign_in_available(&s.status, provider_configured));

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"FYPSupervisor"</h1>
                <p class="login-card__subtitle">"Sign in to manage your supervision"</p>
                <Show when=move || session.with(|s| s.status_message().is_some())>
                    <p class="login-message login-message--status">
                        {move || session.with(SessionState::status_message).unwrap_or_default()}
                    </p>
                </Show>
                <Show when=signed_in>
                    <p class="login-message">
                        "Signed in as "
                        <strong>{move || session.with(SessionState::user_label).unwrap_or_default()}</strong>
                    </p>
                    <a href=Route::Dashboard.path() class="login-button">"Go to dashboard"</a>
                </Show>
                <Show when=can_sign_in>
                    <form class="login-form" on:submit=on_sign_in>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Display name (optional)"
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit">"Sign In"</button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message login-message--error">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
