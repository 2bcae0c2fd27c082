//! Login page with email + password form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::accounts::Accounts;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_guest_redirect;
use crate::util::clock::now_ms;

/// Login page. A successful sign-in updates `AuthState`, and the guest
/// redirect then moves the visitor to their landing route.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_guest_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(ui.try_update(UiState::take_flash).flatten());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        notice.set(None);
        match Accounts::browser().login(&email.get_untracked(), &password.get_untracked(), now_ms()) {
            Ok(session) => {
                error.set(None);
                auth.set(AuthState::loaded(Some(session)));
            }
            Err(e) => {
                password.set(String::new());
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <Show when=move || notice.get().is_some()>
                    <p class="auth-card__notice">{move || notice.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit">
                        "Sign in"
                    </button>
                </form>
                <div class="auth-card__links">
                    <a href="/reset-password">"Forgot password?"</a>
                    <a href="/register">"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
