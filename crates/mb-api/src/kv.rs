//! String-keyed value maps carried by responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Read-only key-value map (response metadata, validation parameters).
///
/// Values arrive as arbitrary JSON scalars. A key whose value is `null` is
/// treated as absent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KvStore(BTreeMap<String, Value>);

/// Paging metadata of a list response.
pub type ResponseMeta = KvStore;

impl KvStore {
    /// Whether a non-null value is stored under `key`.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|value| !value.is_null())
    }

    /// Value under `key` rendered as a string.
    ///
    /// Strings are returned verbatim; numbers and booleans use their JSON
    /// text. Arrays and objects are returned as compact JSON.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Number of stored keys, including those with `null` values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for KvStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
