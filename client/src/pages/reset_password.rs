//! Password reset page.
//!
//! There is no email round trip: knowing a registered address is enough to
//! set a new password. Account security is out of scope for this app.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::accounts::{Accounts, PasswordResetForm};
use crate::state::ui::UiState;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(PasswordResetForm::default());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match Accounts::browser().reset_password(&form.get_untracked()) {
            Ok(()) => {
                error.set(None);
                ui.update(|u| u.flash = Some("Password updated. Sign in with your new password.".to_owned()));
                navigate("/login", NavigateOptions::default());
            }
            Err(e) => {
                form.update(|f| {
                    f.new_password.clear();
                    f.confirm_password.clear();
                });
                error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset password"</h1>
                <form class="auth-form" on:submit=on_submit>
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
                        "New password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || form.get().new_password
                            on:input=move |ev| form.update(|f| f.new_password = event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Confirm new password"
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
                        "Update password"
                    </button>
                </form>
                <div class="auth-card__links">
                    <a href="/login">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
