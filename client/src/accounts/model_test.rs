use super::*;

fn record() -> UserRecord {
    UserRecord {
        id: "u-1".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "engine1".to_owned(),
        role: Role::User,
        created_at: 1_000,
        last_login_at: None,
        last_logout_at: None,
    }
}

// =============================================================
// Serialization layout
// =============================================================

#[test]
fn user_record_serializes_camel_case_fields() {
    let value = serde_json::to_value(record()).unwrap();
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["lastName"], "Lovelace");
    assert_eq!(value["createdAt"], 1_000);
    assert_eq!(value["role"], "user");
    assert!(value["lastLoginAt"].is_null());
}

#[test]
fn user_record_missing_optional_fields_use_defaults() {
    let raw = r#"{"id":"x","firstName":"A","lastName":"B","email":"a@b.co","password":"secret","createdAt":5}"#;
    let user: UserRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(user.role, Role::User);
    assert_eq!(user.last_login_at, None);
    assert_eq!(user.last_logout_at, None);
}

#[test]
fn role_admin_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn full_name_joins_first_and_last() {
    assert_eq!(record().full_name(), "Ada Lovelace");
}

#[test]
fn never_logged_in_is_offline() {
    assert!(!record().is_online());
}

#[test]
fn login_without_logout_is_online() {
    let user = UserRecord { last_login_at: Some(10), ..record() };
    assert!(user.is_online());
}

#[test]
fn logout_after_login_is_offline() {
    let user = UserRecord {
        last_login_at: Some(10),
        last_logout_at: Some(20),
        ..record()
    };
    assert!(!user.is_online());
}

#[test]
fn login_after_logout_is_online() {
    let user = UserRecord {
        last_login_at: Some(30),
        last_logout_at: Some(20),
        ..record()
    };
    assert!(user.is_online());
}

#[test]
fn session_for_user_copies_identity() {
    let user = UserRecord { role: Role::Admin, ..record() };
    let session = Session::for_user(&user, 42);
    assert_eq!(session.user_id, "u-1");
    assert_eq!(session.email, "ada@example.com");
    assert_eq!(session.logged_in_at, 42);
    assert!(session.is_admin());
}
