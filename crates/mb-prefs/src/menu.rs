//! Persisted open/closed state of the navigation menu.

use crate::{PreferenceError, PreferenceStore, PreferenceStoreExt};

/// Preference key for the menu state.
pub const MENU_IS_OPEN_KEY: &str = "menu-is-open";

/// Menu open/closed flag stored in a [`PreferenceStore`].
///
/// A menu that has never been toggled is closed.
pub struct MenuPreference<'a> {
    store: &'a dyn PreferenceStore,
}

impl<'a> MenuPreference<'a> {
    /// Wrap a preference store.
    #[must_use]
    pub fn new(store: &'a dyn PreferenceStore) -> Self {
        Self { store }
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.store.get_bool(MENU_IS_OPEN_KEY)
    }

    /// Open or close the menu.
    pub fn set_open(&self, open: bool) -> Result<(), PreferenceError> {
        self.store.set_bool(MENU_IS_OPEN_KEY, open)
    }

    /// Flip the menu state and return the new state.
    pub fn toggle(&self) -> Result<bool, PreferenceError> {
        let open = !self.is_open();
        self.set_open(open)?;
        tracing::debug!(open, "menu toggled");
        Ok(open)
    }
}
