//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, form state, account
//! calls) and delegates table and chrome rendering to `components`.

pub mod admin;
pub mod home;
pub mod login;
pub mod register;
pub mod reset_password;
