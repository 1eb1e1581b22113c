//! Extension trait for [`PreferenceStore`] with typed convenience methods.

use crate::{PreferenceError, PreferenceStore};

/// Typed convenience methods for [`PreferenceStore`].
///
/// Booleans are stored as the strings `"true"` and `"false"`. Any other
/// stored text, or no value at all, reads as `false`.
pub trait PreferenceStoreExt: PreferenceStore {
    /// Read a boolean preference.
    fn get_bool(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| value == "true")
    }

    /// Store a boolean preference.
    fn set_bool(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.set(key, if value { "true" } else { "false" })
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_get_bool_missing_is_false() {
        let store = MemoryStore::new();

        assert!(!store.get_bool("flag"));
    }

    #[test]
    fn test_set_bool_round_trips() {
        let store = MemoryStore::new();

        store.set_bool("flag", true).unwrap();
        assert!(store.get_bool("flag"));
        assert_eq!(store.get("flag"), Some("true".to_owned()));

        store.set_bool("flag", false).unwrap();
        assert!(!store.get_bool("flag"));
        assert_eq!(store.get("flag"), Some("false".to_owned()));
    }

    #[test]
    fn test_get_bool_only_accepts_exact_true() {
        let store = MemoryStore::new();

        for value in ["TRUE", "1", "yes", " true"] {
            store.set("flag", value).unwrap();
            assert!(!store.get_bool("flag"), "{value:?} should read as false");
        }
    }

    #[test]
    fn test_ext_on_trait_object() {
        let store: Box<dyn PreferenceStore> = Box::new(MemoryStore::new());

        store.set_bool("flag", true).unwrap();

        assert!(store.get_bool("flag"));
    }
}
