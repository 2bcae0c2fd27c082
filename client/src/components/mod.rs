//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the admin list while reading/writing
//! shared state from Leptos context providers or props.

pub mod navbar;
pub mod stats_bar;
pub mod user_table;
