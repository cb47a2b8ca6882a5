//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages assume an authenticated session; the
//! `ProtectedRoute` wrapper in `app` guarantees it.

pub mod dashboard;
pub mod login;
pub mod profile;
