//! User table for the admin dashboard.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::accounts::UserRecord;
use crate::state::directory::is_new_user;
use crate::util::clock::{format_optional, format_timestamp};

/// Status badges shown next to a user's name.
pub(crate) fn status_badges(user: &UserRecord, now: i64) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if is_new_user(user, now) {
        badges.push("New");
    }
    if user.is_online() {
        badges.push("Online");
    }
    badges
}

/// Table of users. Admin rows have no delete action.
#[component]
pub fn UserTable(
    #[prop(into)] rows: Signal<Vec<UserRecord>>,
    #[prop(into)] now: Signal<i64>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="user-table">
            <div class="user-table__summary">
                {move || {
                    let count = rows.get().len();
                    if count == 1 { "1 user".to_owned() } else { format!("{count} users") }
                }}
            </div>
            <Show
                when=move || !rows.get().is_empty()
                fallback=move || view! { <div class="user-table__empty">"No matching users."</div> }
            >
                <div class="user-table__wrap">
                    <table class="user-table__table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Created"</th>
                                <th>"Last login"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let now = now.get();
                                rows.get()
                                    .into_iter()
                                    .map(|user| {
                                        let badges = status_badges(&user, now);
                                        let is_admin = user.is_admin();
                                        let delete_id = user.id.clone();
                                        view! {
                                            <tr class:user-table__row--admin=is_admin>
                                                <td>
                                                    <span class="user-table__name">{user.full_name()}</span>
                                                    {badges
                                                        .into_iter()
                                                        .map(|b| {
                                                            view! {
                                                                <span class=format!(
                                                                    "user-table__badge user-table__badge--{}",
                                                                    b.to_lowercase(),
                                                                )>{b}</span>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </td>
                                                <td class="user-table__mono">{user.email.clone()}</td>
                                                <td>{user.role.label()}</td>
                                                <td>{format_timestamp(user.created_at)}</td>
                                                <td>{format_optional(user.last_login_at)}</td>
                                                <td>
                                                    <Show
                                                        when=move || !is_admin
                                                        fallback=move || view! { <span class="user-table__na">"—"</span> }
                                                    >
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            title="Delete user"
                                                            on:click={
                                                                let delete_id = delete_id.clone();
                                                                move |_| on_delete.run(delete_id.clone())
                                                            }
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </Show>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
