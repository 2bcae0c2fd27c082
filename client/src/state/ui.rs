//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of auth state so the navbar and pages can
//! change them without touching account data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
    /// One-shot notice carried across a navigation (e.g. "account created").
    pub flash: Option<String>,
}

impl UiState {
    /// Take the pending flash notice, leaving none behind.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}
