use super::*;

#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct Pref {
    name: String,
    count: u32,
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get_item(USERS_KEY), None);
}

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_overwrite_is_last_write_wins() {
    let store = MemoryStore::new();
    store.set_item("k", "first").unwrap();
    store.set_item("k", "second").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("second"));
}

#[test]
fn memory_store_remove_missing_key_is_ok() {
    let store = MemoryStore::new();
    assert_eq!(store.remove_item("missing"), Ok(()));
}

#[test]
fn read_only_store_rejects_writes_but_serves_seeded_values() {
    let store = MemoryStore::read_only();
    store.insert_raw("k", "seeded");
    assert!(matches!(store.set_item("k", "v"), Err(StorageError::Rejected(_))));
    assert!(matches!(store.remove_item("k"), Err(StorageError::Rejected(_))));
    assert_eq!(store.get_item("k").as_deref(), Some("seeded"));
}

#[test]
fn rejected_key_fails_while_other_keys_write() {
    let store = MemoryStore::new();
    store.reject_key(SESSION_KEY);
    assert!(matches!(store.set_item(SESSION_KEY, "{}"), Err(StorageError::Rejected(_))));
    assert!(matches!(store.remove_item(SESSION_KEY), Err(StorageError::Rejected(_))));
    assert_eq!(store.set_item(USERS_KEY, "[]"), Ok(()));
    assert_eq!(store.get_item(USERS_KEY).as_deref(), Some("[]"));
}

#[test]
fn read_only_can_be_switched_on_after_seeding() {
    let store = MemoryStore::new();
    store.set_item("k", "v").unwrap();
    store.set_read_only(true);
    assert!(store.set_item("k", "w").is_err());
    store.set_read_only(false);
    assert_eq!(store.set_item("k", "w"), Ok(()));
}

// =============================================================
// BrowserStore outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_unavailable_natively() {
    let store = BrowserStore;
    assert_eq!(store.get_item(SESSION_KEY), None);
    assert_eq!(store.set_item(SESSION_KEY, "{}"), Err(StorageError::Unavailable));
    assert_eq!(store.remove_item(SESSION_KEY), Err(StorageError::Unavailable));
}

// =============================================================
// JSON helpers
// =============================================================

#[test]
fn save_json_then_load_json() {
    let store = MemoryStore::new();
    let pref = Pref { name: "alpha".to_owned(), count: 3 };
    save_json(&store, "pref", &pref).unwrap();
    assert_eq!(load_json::<_, Pref>(&store, "pref"), Some(pref));
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::new();
    assert_eq!(load_json::<_, Pref>(&store, "pref"), None);
}

#[test]
fn load_json_malformed_payload_is_none() {
    let store = MemoryStore::new();
    store.insert_raw("pref", "{not json");
    assert_eq!(load_json::<_, Pref>(&store, "pref"), None);
}

#[test]
fn save_json_surfaces_write_failure() {
    let store = MemoryStore::read_only();
    let pref = Pref { name: "alpha".to_owned(), count: 1 };
    assert!(matches!(save_json(&store, "pref", &pref), Err(StorageError::Rejected(_))));
}
