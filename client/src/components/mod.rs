//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render application chrome and the route guard while reading
//! shared session and notice state from Leptos context providers.

pub mod navbar;
pub mod protected_route;
pub mod toasts;
