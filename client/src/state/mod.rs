//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `directory`, `ui`) so pages and
//! components depend on small focused models provided via Leptos context.

pub mod auth;
pub mod directory;
pub mod ui;
