//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notices`) so components depend on
//! small focused models provided through context.

pub mod notices;
pub mod session;
