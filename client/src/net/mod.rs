//! Networking modules for the hosted identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` adapts the browser session store to the `IdentityProvider`
//! seam consumed by the session observer and log-out action.

pub mod provider;
