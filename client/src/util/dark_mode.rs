//! Dark mode initialization and toggle.
//!
//! Reads the theme preference from local storage and applies a `data-theme`
//! attribute to the `<html>` element. Toggle writes back through the same
//! store and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::{DARK_MODE_KEY, KeyValueStore};

/// Stored preference, if the user has ever toggled the theme.
pub fn stored_preference<S: KeyValueStore + ?Sized>(store: &S) -> Option<bool> {
    store.get_item(DARK_MODE_KEY).map(|v| v == "true")
}

/// Read the dark mode preference.
///
/// Returns the stored preference, or whether the system prefers dark mode
/// when nothing is stored.
pub fn read_preference<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    if let Some(stored) = stored_preference(store) {
        return stored;
    }
    system_prefers_dark()
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(e) = el.set_attribute("data-theme", if enabled { "dark" } else { "light" }) {
                log::warn!("could not set data-theme: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, persist the new preference, and return it.
///
/// A failed write still flips the theme for the current page.
pub fn toggle<S: KeyValueStore + ?Sized>(store: &S, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = store.set_item(DARK_MODE_KEY, if next { "true" } else { "false" }) {
        log::warn!("dark mode preference not saved: {e}");
    }
    next
}
