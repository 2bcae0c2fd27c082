#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::util::storage::MemoryStore;

#[test]
fn read_preference_defaults_to_light_without_browser() {
    assert!(!read_preference(&MemoryStore::new()));
}

#[test]
fn read_preference_uses_stored_value() {
    let store = MemoryStore::new();
    store.insert_raw(DARK_MODE_KEY, "true");
    assert!(read_preference(&store));
    store.insert_raw(DARK_MODE_KEY, "false");
    assert!(!read_preference(&store));
}

#[test]
fn toggle_flips_and_persists() {
    let store = MemoryStore::new();
    assert!(toggle(&store, false));
    assert_eq!(stored_preference(&store), Some(true));
    assert!(!toggle(&store, true));
    assert_eq!(stored_preference(&store), Some(false));
}

#[test]
fn toggle_still_flips_when_write_fails() {
    let store = MemoryStore::read_only();
    assert!(toggle(&store, false));
    assert_eq!(stored_preference(&store), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
