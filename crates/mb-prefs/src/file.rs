//! File-based preference store.
//!
//! [`FileStore`] keeps all preferences in one JSON object:
//!
//! ```text
//! {
//!   "menu-is-open": "true"
//! }
//! ```
//!
//! A missing file reads as an empty store. Values that are not strings are
//! invisible to [`get`](PreferenceStore::get) but kept on write. Writes
//! rewrite the whole file and create parent directories as needed. A file
//! that cannot be read or parsed is never overwritten.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde_json::{Map, Value};

use crate::{PreferenceError, PreferenceStore};

/// [`PreferenceStore`] backed by a JSON file.
pub struct FileStore {
    path: PathBuf,
    /// Serializes file access within the process.
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by the file at `path`.
    ///
    /// The file is not touched until the first write.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>, PreferenceError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| PreferenceError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        match self.read_all() {
            Ok(mut values) => match values.remove(key)? {
                Value::String(value) => Some(value),
                _ => None,
            },
            Err(e) => {
                tracing::warn!("ignoring unreadable preferences: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut values = self.read_all()?;
        values.insert(key.to_owned(), Value::String(value.to_owned()));
        let json = serde_json::to_string_pretty(&values)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), key, value, "preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    static_assertions::assert_impl_all!(super::FileStore: Send, Sync);

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_set_and_get() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("prefs.json"));

        store.set("menu-is-open", "true").unwrap();

        assert_eq!(store.get("menu-is-open"), Some("true".to_owned()));
    }

    #[test]
    fn test_file_store_missing_file_reads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("prefs.json"));

        assert_eq!(store.get("anything"), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");

        FileStore::new(path.clone()).set("key", "kept").unwrap();

        assert_eq!(FileStore::new(path).get("key"), Some("kept".to_owned()));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("prefs.json"));

        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.set("a", "3").unwrap();

        assert_eq!(store.get("a"), Some("3".to_owned()));
        assert_eq!(store.get("b"), Some("2".to_owned()));
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deeply/nested/prefs.json");

        FileStore::new(path.clone()).set("key", "value").unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("\"key\": \"value\""));
    }

    #[test]
    fn test_file_store_malformed_file_reads_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();
        let store = FileStore::new(path);

        assert_eq!(store.get("key"), None);
    }

    #[test]
    fn test_file_store_malformed_file_not_overwritten() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, "{\"theme\": \"dark\",").unwrap();
        let store = FileStore::new(path.clone());

        let result = store.set("key", "value");

        assert!(matches!(result, Err(PreferenceError::Malformed { .. })));
        assert_eq!(fs::read_to_string(path).unwrap(), "{\"theme\": \"dark\",");
    }

    #[test]
    fn test_file_store_keeps_non_string_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, r#"{"theme": "dark", "sidebar-width": 240}"#).unwrap();
        let store = FileStore::new(path.clone());

        store.set("menu-is-open", "true").unwrap();

        assert_eq!(store.get("theme"), Some("dark".to_owned()));
        assert_eq!(store.get("sidebar-width"), None);
        assert_eq!(store.get("menu-is-open"), Some("true".to_owned()));
        let saved: Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(saved["sidebar-width"], 240);
    }

    #[test]
    fn test_file_store_non_utf8_file_not_overwritten() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("prefs.json");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let store = FileStore::new(path.clone());

        assert_eq!(store.get("key"), None);
        assert!(matches!(store.set("key", "value"), Err(PreferenceError::Io { .. })));
        assert_eq!(fs::read(path).unwrap(), vec![0xff, 0xfe, 0x00]);
    }

    #[test]
    fn test_file_store_concurrent_reads_see_complete_file() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::new(tmp.path().join("prefs.json"));
        store.set("menu-is-open", "true").unwrap();

        std::thread::scope(|scope| {
            scope.spawn(|| {
                for i in 0..50 {
                    store.set("counter", &i.to_string()).unwrap();
                }
            });
            for _ in 0..50 {
                assert_eq!(store.get("menu-is-open"), Some("true".to_owned()));
            }
        });
    }

    #[test]
    fn test_file_store_write_error() {
        let tmp = TempDir::new().unwrap();
        // A directory where the file should be makes the write fail
        let path = tmp.path().join("prefs.json");
        fs::create_dir_all(&path).unwrap();
        let store = FileStore::new(path);

        let result = store.set("key", "value");

        assert!(matches!(result, Err(PreferenceError::Io { .. })));
    }
}
