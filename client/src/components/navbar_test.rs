use super::*;
use crate::util::storage::MemoryStore;

const T0: i64 = 1_700_000_000_000;

fn signed_in_accounts() -> (Accounts<MemoryStore>, Session) {
    let acc = Accounts::new(MemoryStore::new());
    let session = acc
        .login(crate::accounts::ADMIN_EMAIL, crate::accounts::ADMIN_PASSWORD, T0)
        .unwrap();
    (acc, session)
}

// =============================================================
// logout_outcome
// =============================================================

#[test]
fn successful_logout_signs_out() {
    let (acc, _) = signed_in_accounts();
    let state = logout_outcome(acc.logout(T0 + 1)).unwrap();
    assert!(!state.loading);
    assert_eq!(state.session, None);
}

#[test]
fn logout_with_no_session_still_signs_out() {
    let state = logout_outcome(Ok(None)).unwrap();
    assert_eq!(state.session, None);
}

#[test]
fn failed_logout_reports_message_and_keeps_session() {
    let (acc, session) = signed_in_accounts();
    acc.store().set_read_only(true);

    let message = logout_outcome(acc.logout(T0 + 1)).unwrap_err();
    assert!(message.starts_with("Could not save"), "{message}");
    assert_eq!(acc.current_session(), Some(session));
}
