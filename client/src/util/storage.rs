//! Browser `localStorage` access for account and preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every persisted byte of the app goes through [`KeyValueStore`]. The browser
//! implementation wraps `window.localStorage`; the in-memory implementation
//! backs unit tests and any non-browser build.
//!
//! TRADE-OFFS
//! ==========
//! Writes are last-write-wins with no locking. Two tabs editing the user list
//! at once can lose an update, which is acceptable for a client-only store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the JSON array of registered users.
pub const USERS_KEY: &str = "portal_users";
/// Key holding the JSON session record of the signed-in user.
pub const SESSION_KEY: &str = "portal_current_user";
/// Key holding the dark mode preference (`"true"` / `"false"`).
pub const DARK_MODE_KEY: &str = "portal_dark";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("browser storage rejected the write: {0}")]
    Rejected(String),
    #[error("value could not be encoded: {0}")]
    Encode(String),
}

/// String key/value storage with the `localStorage` call shape.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error when the storage is missing or refuses the write
    /// (for example when the quota is exhausted).
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns an error when the storage is missing or refuses the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`. Outside a hydrated browser build it holds nothing
/// and refuses writes.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory store with the same semantics as `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
    read_only: Cell<bool>,
    rejected_keys: RefCell<BTreeSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes fail with [`StorageError::Rejected`], mimicking a
    /// full quota.
    pub fn read_only() -> Self {
        let store = Self::default();
        store.read_only.set(true);
        store
    }

    /// Start or stop refusing every write.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }

    /// Refuse writes and removals for `key` only.
    pub fn reject_key(&self, key: &str) {
        self.rejected_keys.borrow_mut().insert(key.to_owned());
    }

    fn check_writable(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only.get() || self.rejected_keys.borrow().contains(key) {
            return Err(StorageError::Rejected("QuotaExceededError".to_owned()));
        }
        Ok(())
    }

    /// Seed a raw value, bypassing the read-only flag.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.check_writable(key)?;
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Load a JSON value stored under `key`.
///
/// Missing keys and undecodable payloads both read as `None`; the latter is
/// logged so a corrupted entry is visible in the console.
pub fn load_json<S: KeyValueStore + ?Sized, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = store.get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring malformed storage entry {key}: {e}");
            None
        }
    }
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// Returns an error if encoding fails or the store refuses the write.
pub fn save_json<S: KeyValueStore + ?Sized, T: Serialize>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    store.set_item(key, &raw)
}
