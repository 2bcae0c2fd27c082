//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::accounts::{Accounts, RegistrationForm};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_guest_redirect;
use crate::util::clock::now_ms;

/// Registration page. Creates a `user` account and sends the visitor to
/// `/login` with a notice.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    install_guest_redirect(auth, navigate.clone());

    let form = RwSignal::new(RegistrationForm::default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match Accounts::browser().register(&form.get_untracked(), now_ms()) {
            Ok(user) => {
                error.set(None);
                ui.update(|u| {
                    u.flash = Some(format!("Account created for {}. Sign in to continue.", user.email));
                });
                navigate("/login", NavigateOptions::default());
            }
            Err(e) => {
                form.update(|f| f.confirm_password.clear());
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <label class="auth-form__label">
                            "First name"
                            <input
                                class="auth-form__input"
                                type="text"
                                autocomplete="given-name"
                                prop:value=move || form.get().first_name
                                on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                            />
                        </label>
                        <label class="auth-form__label">
                            "Last name"
                            <input
                                class="auth-form__input"
                                type="text"
                                autocomplete="family-name"
                                prop:value=move || form.get().last_name
                                on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            autocomplete="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().confirm_password
                            on:input=move |ev| form.update(|f| f.confirm_password = event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit">
                        "Register"
                    </button>
                </form>
                <div class="auth-card__links">
                    <span>"Already registered? "</span>
                    <a href="/login">"Sign in"</a>
                </div>
            </div>
        </div>
    }
}
