//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior for anonymous
//! visitors on admin routes and for signed-in users on guest-only routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, should_redirect_non_admin, signed_in_redirect};

/// Send signed-in visitors away from guest-only pages.
pub fn install_guest_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(route) = signed_in_redirect(&auth.get()) {
            navigate(route, NavigateOptions::default());
        }
    });
}

/// Redirect to `/login` whenever auth has loaded and the session is not an admin.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_non_admin(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
