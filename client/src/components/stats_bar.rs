//! Headline counts above the admin user table.

use leptos::prelude::*;

use crate::state::directory::DirectoryStats;

#[component]
pub fn StatsBar(#[prop(into)] stats: Signal<DirectoryStats>) -> impl IntoView {
    let cards = move || {
        let s = stats.get();
        [
            ("Total users", s.total),
            ("New this week", s.new_this_week),
            ("Online", s.online),
            ("Admins", s.admins),
        ]
    };

    view! {
        <div class="stats-bar">
            {move || {
                cards()
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class="stats-bar__card">
                                <span class="stats-bar__value">{value}</span>
                                <span class="stats-bar__label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
