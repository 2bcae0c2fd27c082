//! Admin dashboard model: statistics, filtering, and sorting of the user list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page reads the stored user list on demand and renders
//! [`visible_users`] for the current [`DirectoryState`]. Everything here is
//! pure so the list behavior is testable without a browser.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use std::cmp::Reverse;

use crate::accounts::{Role, UserRecord};

/// Accounts created within this window count as new.
pub const NEW_USER_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Whether `user` was created less than a week before `now`.
///
/// A creation time after `now` (clock skew between tabs) also counts as new.
pub fn is_new_user(user: &UserRecord, now: i64) -> bool {
    now.saturating_sub(user.created_at) < NEW_USER_WINDOW_MS
}

/// Headline counts for the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    pub total: usize,
    pub admins: usize,
    pub new_this_week: usize,
    pub online: usize,
}

impl DirectoryStats {
    pub fn collect(users: &[UserRecord], now: i64) -> Self {
        users.iter().fold(Self::default(), |mut stats, user| {
            stats.total += 1;
            if user.is_admin() {
                stats.admins += 1;
            }
            if is_new_user(user, now) {
                stats.new_this_week += 1;
            }
            if user.is_online() {
                stats.online += 1;
            }
            stats
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    All,
    Admins,
    Users,
}

impl RoleFilter {
    pub const ALL: [RoleFilter; 3] = [RoleFilter::All, RoleFilter::Admins, RoleFilter::Users];

    pub fn matches(self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Admins => role == Role::Admin,
            RoleFilter::Users => role == Role::User,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoleFilter::All => "all",
            RoleFilter::Admins => "admins",
            RoleFilter::Users => "users",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RoleFilter::All => "All roles",
            RoleFilter::Admins => "Admins",
            RoleFilter::Users => "Users",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `All`.
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == raw)
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    Name,
    Email,
    LastLogin,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::Name,
        SortKey::Email,
        SortKey::LastLogin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::Name => "name",
            SortKey::Email => "email",
            SortKey::LastLogin => "last-login",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::Oldest => "Oldest first",
            SortKey::Name => "Name",
            SortKey::Email => "Email",
            SortKey::LastLogin => "Last login",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `Newest`.
    pub fn parse(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == raw)
            .unwrap_or_default()
    }
}

/// Dashboard list controls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryState {
    pub query: String,
    pub role_filter: RoleFilter,
    pub sort: SortKey,
}

fn matches_query(user: &UserRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        user.first_name.to_lowercase(),
        user.last_name.to_lowercase(),
        user.full_name().to_lowercase(),
        user.email.to_lowercase(),
    ]
    .iter()
    .any(|field| field.contains(needle))
}

/// Apply the search query, role filter, and sort order.
///
/// The sort is stable, so records that compare equal keep storage order.
pub fn visible_users(users: &[UserRecord], state: &DirectoryState) -> Vec<UserRecord> {
    let needle = state.query.trim().to_lowercase();
    let mut rows = users
        .iter()
        .filter(|u| state.role_filter.matches(u.role))
        .filter(|u| matches_query(u, &needle))
        .cloned()
        .collect::<Vec<_>>();

    match state.sort {
        SortKey::Newest => rows.sort_by_key(|u| Reverse(u.created_at)),
        SortKey::Oldest => rows.sort_by_key(|u| u.created_at),
        SortKey::Name => rows.sort_by_key(|u| (u.last_name.to_lowercase(), u.first_name.to_lowercase())),
        SortKey::Email => rows.sort_by(|a, b| a.email.cmp(&b.email)),
        // Never-logged-in users sink to the bottom.
        SortKey::LastLogin => rows.sort_by_key(|u| Reverse(u.last_login_at)),
    }
    rows
}
