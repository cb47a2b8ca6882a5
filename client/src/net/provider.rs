//! Browser-backed identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted identity service is configured through `ProviderConfig`. The
//! session itself is tracked by an in-process `MemoryProvider` and mirrored to
//! `localStorage`, so a reload restores the signed-in principal before the
//! first emission reaches the observer.
//!
//! ERROR HANDLING
//! ==============
//! An invalid configuration never panics: the session stream yields a single
//! `Misconfigured` error, which the observer surfaces as a failed session,
//! and `sign_in` refuses with the same error instead of storing a session
//! no subscriber could observe.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use futures::StreamExt;
use fyp_supervisor::config::ProviderConfig;
use fyp_supervisor::error::ProviderError;
use fyp_supervisor::memory::MemoryProvider;
use fyp_supervisor::provider::{IdentityProvider, SessionUpdates};
use fyp_supervisor::session::Principal;

use crate::util::storage;

/// `localStorage` key holding the persisted principal for `project_id`.
#[must_use]
pub fn session_storage_key(project_id: &str) -> String {
    format!("fyp:{project_id}:session")
}

#[derive(Clone)]
pub struct BrowserProvider {
    config: ProviderConfig,
    inner: MemoryProvider,
}

impl BrowserProvider {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self { config, inner: MemoryProvider::new() }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Resolve the initial session from storage. Absent entries resolve to
    /// signed out.
    pub fn restore(&self) {
        if self.config.validate().is_err() {
            return;
        }
        let principal = storage::load_json::<Principal>(&self.storage_key());
        log::debug!("restored session: signed_in={}", principal.is_some());
        self.inner.resolve(principal);
    }

    /// Establish a session for `principal` and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Misconfigured`] when the project config is
    /// invalid; nothing is stored in that case.
    pub fn sign_in(&self, principal: Principal) -> Result<(), ProviderError> {
        if let Err(err) = self.config.validate() {
            log::warn!("refusing sign-in, provider misconfigured: {err}");
            return Err(err.into());
        }
        storage::save_json(&self.storage_key(), &principal);
        log::info!("signed in uid={}", principal.uid);
        self.inner.sign_in(principal);
        Ok(())
    }

    fn storage_key(&self) -> String {
        session_storage_key(&self.config.project_id)
    }
}

#[async_trait::async_trait(?Send)]
impl IdentityProvider for BrowserProvider {
    fn session_changes(&self) -> SessionUpdates {
        if let Err(err) = self.config.validate() {
            log::error!("identity provider config invalid: {err}");
            let err = ProviderError::from(err);
            return futures::stream::once(async move { Err(err) }).boxed_local();
        }
        self.inner.session_changes()
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.inner.sign_out().await?;
        storage::remove(&self.storage_key());
        Ok(())
    }
}
