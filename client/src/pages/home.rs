//! Home page: greeting for signed-in users, entry links for guests.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::accounts::Session;
use crate::state::auth::AuthState;
use crate::util::clock::format_timestamp;

/// Greeting line for a signed-in session.
pub(crate) fn greeting(session: &Session) -> String {
    format!("Welcome back, {}!", session.first_name)
}

/// "Signed in at …" line for a session.
pub(crate) fn signed_in_line(session: &Session) -> String {
    format!("Signed in at {} UTC as {}.", format_timestamp(session.logged_in_at), session.email)
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            {move || {
                let state = auth.get();
                if state.loading {
                    return view! { <p class="home-page__loading">"Loading..."</p> }.into_any();
                }
                match state.session {
                    Some(session) => {
                        let is_admin = session.is_admin();
                        view! {
                            <section class="home-page__hero">
                                <h1>{greeting(&session)}</h1>
                                <p class="home-page__meta">{signed_in_line(&session)}</p>
                                <Show when=move || is_admin>
                                    <a href="/admin" class="btn btn--primary">
                                        "Open dashboard"
                                    </a>
                                </Show>
                            </section>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <section class="home-page__hero">
                                <h1>"Portal"</h1>
                                <p class="home-page__meta">
                                    "Accounts are kept in this browser only."
                                </p>
                                <div class="home-page__actions">
                                    <a href="/login" class="btn btn--primary">
                                        "Sign in"
                                    </a>
                                    <a href="/register" class="btn">
                                        "Create an account"
                                    </a>
                                </div>
                            </section>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
