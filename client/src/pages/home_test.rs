use super::*;
use crate::accounts::Role;

fn session() -> Session {
    Session {
        user_id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        role: Role::User,
        logged_in_at: 1_700_000_000_000,
    }
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting(&session()), "Welcome back, Ada!");
}

#[test]
fn signed_in_line_formats_time_and_email() {
    assert_eq!(
        signed_in_line(&session()),
        "Signed in at 2023-11-14 22:13 UTC as ada@example.com."
    );
}
