//! User preference storage for mimisbrunnr.
//!
//! UI preferences (such as whether the navigation menu is open) survive
//! restarts. Instead of reaching for an ambient global store, consumers are
//! handed a [`PreferenceStore`] and read or write string values by key.
//!
//! # Implementations
//!
//! - [`NullStore`]: Remembers nothing (every read misses)
//! - [`MemoryStore`]: Process-local map
//! - [`FileStore`]: JSON file on disk
//!
//! # Example
//!
//! ```
//! use mb_prefs::{MemoryStore, MenuPreference};
//!
//! let store = MemoryStore::new();
//! let menu = MenuPreference::new(&store);
//!
//! assert!(!menu.is_open());
//! assert!(menu.toggle().unwrap());
//! assert!(menu.is_open());
//! ```

mod ext;
mod file;
mod menu;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

pub use ext::PreferenceStoreExt;
pub use file::FileStore;
pub use menu::{MENU_IS_OPEN_KEY, MenuPreference};

/// Error returned when a preference cannot be persisted.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    /// I/O error reading or writing the backing file.
    #[error("Failed to access preferences at {}: {source}", path.display())]
    Io {
        /// Backing file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Existing preferences file is not a JSON object.
    #[error("Malformed preferences file {}: {source}", path.display())]
    Malformed {
        /// Backing file path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// Stored preferences could not be encoded.
    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Key-value store for user preferences.
///
/// Reads never fail: a missing or unreadable value is reported as absent.
/// Writes report errors so callers can tell the user a setting was not saved.
pub trait PreferenceStore: Send + Sync {
    /// Retrieve a stored value.
    ///
    /// # Arguments
    ///
    /// * `key` - Preference key (e.g., "menu-is-open")
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    ///
    /// # Arguments
    ///
    /// * `key` - Preference key
    /// * `value` - Value to store
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// No-op [`PreferenceStore`].
///
/// Every `get` returns `None`; every `set` succeeds and is discarded.
/// Use when persistence is disabled.
pub struct NullStore;

impl PreferenceStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Ok(())
    }
}

/// In-memory [`PreferenceStore`] that lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::MemoryStore: Send, Sync);
    static_assertions::assert_obj_safe!(super::PreferenceStore);

    use super::*;

    #[test]
    fn test_null_store_always_misses() {
        let store = NullStore;

        assert_eq!(store.get("key"), None);

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn test_memory_store_set_and_get() {
        let store = MemoryStore::new();

        store.set("key", "value").unwrap();

        assert_eq!(store.get("key"), Some("value".to_owned()));
        assert_eq!(store.get("other"), None);
    }

    #[test]
    fn test_memory_store_overwrite() {
        let store = MemoryStore::new();

        store.set("key", "first").unwrap();
        store.set("key", "second").unwrap();

        assert_eq!(store.get("key"), Some("second".to_owned()));
    }

    #[test]
    fn test_stores_usable_as_trait_objects() {
        let stores: Vec<Box<dyn PreferenceStore>> =
            vec![Box::new(NullStore), Box::new(MemoryStore::new())];

        for store in &stores {
            assert!(store.set("k", "v").is_ok());
        }
        assert_eq!(stores[1].get("k"), Some("v".to_owned()));
    }
}
