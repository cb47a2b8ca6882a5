//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The application root owns one `RwSignal<SessionState>` fed by a single
//! session observer. Route guards and identity-aware components only read it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use fyp_supervisor::provider::IdentityProvider;
use fyp_supervisor::session::{Principal, SessionStatus};
use leptos::prelude::*;

/// Read-only projection of the provider's session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
}

impl SessionState {
    #[must_use]
    pub fn identity(&self) -> Option<&Principal> {
        self.status.identity()
    }

    /// Label for the signed-in user, if any.
    #[must_use]
    pub fn user_label(&self) -> Option<String> {
        self.identity().map(|p| p.label().to_owned())
    }

    /// Message for the landing view while the session is not usable.
    #[must_use]
    pub fn status_message(&self) -> Option<String> {
        match &self.status {
            SessionStatus::Pending => Some("Checking your session...".to_owned()),
            SessionStatus::Failed(reason) => Some(format!("Sign-in is unavailable: {reason}")),
            SessionStatus::Authenticated(_) | SessionStatus::Unauthenticated => None,
        }
    }
}

/// Subscribe to `provider` for the lifetime of the current reactive owner.
///
/// Each emission is written to `session` in order. The subscription fails
/// the session after `timeout` if the provider never resolves, and is
/// released when the owner is cleaned up.
pub fn install_session_observer(provider: &dyn IdentityProvider, session: RwSignal<SessionState>, timeout: Duration) {
    #[cfg(feature = "csr")]
    {
        use futures::StreamExt;
        use futures::future::{AbortHandle, Abortable};
        use fyp_supervisor::observer::SessionObserver;

        let mut observer =
            SessionObserver::subscribe(provider).with_deadline(timeout, gloo_timers::future::sleep(timeout));
        let (abort, registration) = AbortHandle::new_pair();
        let task = Abortable::new(
            async move {
                while let Some(status) = observer.next().await {
                    log::debug!("session status -> {}", status.label());
                    if session.try_update(|s| s.status = status).is_none() {
                        break;
                    }
                }
            },
            registration,
        );
        leptos::task::spawn_local(async move {
            let _ = task.await;
        });
        on_cleanup(move || abort.abort());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (provider, session, timeout);
    }
}
