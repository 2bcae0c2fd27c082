//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The session itself lives in local
//! storage; this is its reactive mirror.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::accounts::Session;

/// Authentication state tracking the signed-in user and loading status.
///
/// `loading` stays `true` until the browser has read the session key, so guards
/// never redirect during server rendering or before hydration.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    pub fn loaded(session: Option<Session>) -> Self {
        Self { session, loading: false }
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    pub fn display_name(&self) -> Option<String> {
        self.session
            .as_ref()
            .map(|s| format!("{} {}", s.first_name, s.last_name))
    }
}

/// Landing route for a signed-in session: the dashboard for admins, home otherwise.
pub fn home_route(session: &Session) -> &'static str {
    if session.is_admin() { "/admin" } else { "/" }
}

/// Where a guest-only route (login, registration) should send an
/// already signed-in visitor. `None` while loading or when signed out.
pub fn signed_in_redirect(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        return None;
    }
    state.session.as_ref().map(home_route)
}

/// Whether an admin-only route should bounce to `/login`.
pub fn should_redirect_non_admin(state: &AuthState) -> bool {
    !state.loading && !state.is_admin()
}
