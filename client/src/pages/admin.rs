//! Admin dashboard listing every stored account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated on an admin session. The user list is read from local storage when
//! the page mounts and after each deletion; there is no live sync with other
//! tabs beyond the manual refresh button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::accounts::{Accounts, UserRecord};
use crate::components::stats_bar::StatsBar;
use crate::components::user_table::UserTable;
use crate::state::auth::AuthState;
use crate::state::directory::{DirectoryState, DirectoryStats, RoleFilter, SortKey, visible_users};
use crate::util::auth::install_admin_redirect;
use crate::util::clock::now_ms;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_admin_redirect(auth, use_navigate());

    let users = RwSignal::new(Vec::<UserRecord>::new());
    let directory = RwSignal::new(DirectoryState::default());
    let now = RwSignal::new(0_i64);
    let error = RwSignal::new(None::<String>);
    let pending_delete = RwSignal::new(None::<UserRecord>);

    let refresh = move || {
        users.set(Accounts::browser().users());
        now.set(now_ms());
    };

    Effect::new(move || {
        if auth.get().is_admin() {
            refresh();
        }
    });

    let stats = Memo::new(move |_| DirectoryStats::collect(&users.get(), now.get()));
    let rows = Memo::new(move |_| visible_users(&users.get(), &directory.get()));

    let on_delete_request = Callback::new(move |id: String| {
        let target = users.get_untracked().into_iter().find(|u| u.id == id);
        pending_delete.set(target);
    });
    let on_delete_cancel = Callback::new(move |()| pending_delete.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        pending_delete.set(None);
        match Accounts::browser().delete_user(&target.id) {
            Ok(_) => error.set(None),
            Err(e) => error.set(Some(e.to_string())),
        }
        refresh();
    });

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Users"</h1>
                <button class="btn" on:click=move |_| refresh()>
                    "Refresh"
                </button>
            </header>

            <StatsBar stats=stats/>

            <div class="admin-page__controls">
                <input
                    class="admin-page__search"
                    type="search"
                    placeholder="Search name or email"
                    prop:value=move || directory.get().query
                    on:input=move |ev| directory.update(|d| d.query = event_target_value(&ev))
                />
                <select
                    class="admin-page__select"
                    prop:value=move || directory.get().role_filter.as_str()
                    on:change=move |ev| {
                        directory.update(|d| d.role_filter = RoleFilter::parse(&event_target_value(&ev)));
                    }
                >
                    {RoleFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="admin-page__select"
                    prop:value=move || directory.get().sort.as_str()
                    on:change=move |ev| {
                        directory.update(|d| d.sort = SortKey::parse(&event_target_value(&ev)));
                    }
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.as_str()>{k.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <UserTable rows=rows now=now on_delete=on_delete_request/>

            <Show when=move || pending_delete.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| on_delete_cancel.run(())>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Delete user"</h2>
                        <p>
                            {move || {
                                pending_delete
                                    .get()
                                    .map(|u| format!("Delete {} ({})? This cannot be undone.", u.full_name(), u.email))
                                    .unwrap_or_default()
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_delete_cancel.run(())>
                                "Cancel"
                            </button>
                            <button class="btn btn--danger" on:click=move |_| on_delete_confirm.run(())>
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
