//! Top navigation bar: brand, route links, theme toggle, session user, logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::accounts::{AccountError, Accounts, Session};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::dark_mode;
use crate::util::storage::BrowserStore;

/// Auth state after a logout attempt, or the message to show when the
/// session could not be cleared from storage.
pub(crate) fn logout_outcome(result: Result<Option<Session>, AccountError>) -> Result<AuthState, String> {
    match result {
        Ok(_) => Ok(AuthState::loaded(None)),
        Err(e) => {
            log::warn!("logout did not clear storage: {e}");
            Err(e.to_string())
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let signed_in = move || auth.get().session.is_some();
    let is_admin = move || auth.get().is_admin();
    let user_name = move || auth.get().display_name().unwrap_or_default();

    let on_toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(&BrowserStore, u.dark_mode));
    };

    let logout_error = RwSignal::new(None::<String>);

    let on_logout = move |_| match logout_outcome(Accounts::browser().logout(now_ms())) {
        Ok(state) => {
            logout_error.set(None);
            auth.set(state);
            ui.update(|u| u.nav_open = false);
            navigate("/login", NavigateOptions::default());
        }
        Err(message) => logout_error.set(Some(message)),
    };

    view! {
        <nav class="navbar" class:navbar--open=move || ui.get().nav_open>
            <a href="/" class="navbar__brand">
                "Portal"
            </a>
            <button
                class="navbar__menu"
                title="Menu"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
            >
                "\u{2630}"
            </button>
            <div class="navbar__links">
                <Show when=is_admin>
                    <a href="/admin" class="navbar__link">
                        "Dashboard"
                    </a>
                </Show>
                <Show when=move || !signed_in()>
                    <a href="/login" class="navbar__link">
                        "Sign in"
                    </a>
                    <a href="/register" class="navbar__link">
                        "Register"
                    </a>
                </Show>
            </div>
            <span class="navbar__spacer"></span>
            <button
                class="btn navbar__theme"
                title="Toggle dark mode"
                on:click=on_toggle_theme
            >
                {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
            </button>
            <Show when=signed_in>
                <span class="navbar__user">{user_name}</span>
            </Show>
            <Show when=move || logout_error.get().is_some()>
                <span class="navbar__error">{move || logout_error.get().unwrap_or_default()}</span>
            </Show>
            <Show when=signed_in>
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
