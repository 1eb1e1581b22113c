//! Field-level validation errors.
//!
//! The backend reports invalid input as a list of errors, each keyed by the
//! path of the offending field (e.g., "name", "items.0.endpoint"). Lookups
//! match the path exactly.

use serde::{Deserialize, Serialize};

use crate::kv::KvStore;

/// One failed validation rule for one field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field path.
    pub path: String,
    /// Human readable message.
    pub message: String,
    /// Rule that failed (e.g., "required", "unique").
    pub rule: String,
    /// Rule parameters (e.g., `{"max": 100}` for a length limit).
    #[serde(default)]
    pub params: KvStore,
}

impl ValidationError {
    /// Create an error without parameters.
    #[must_use]
    pub fn new(path: &str, rule: &str, message: &str) -> Self {
        Self {
            path: path.to_owned(),
            message: message.to_owned(),
            rule: rule.to_owned(),
            params: KvStore::default(),
        }
    }

    /// Attach rule parameters.
    #[must_use]
    pub fn with_params(mut self, params: KvStore) -> Self {
        self.params = params;
        self
    }
}

/// All validation errors of one response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Whether any error is reported for exactly `path`.
    #[must_use]
    pub fn exists_for_path(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }

    /// Errors reported for exactly `path`, in response order.
    #[must_use]
    pub fn for_path(&self, path: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.path == path).collect()
    }

    /// Whether no errors were reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn errors() -> ValidationErrors {
        ValidationErrors::from(vec![
            ValidationError::new("name", "required", "name is required"),
            ValidationError::new("name", "unique", "name must be unique"),
            ValidationError::new("endpoint", "required", "endpoint is required"),
        ])
    }

    #[test]
    fn test_exists_for_path() {
        let errors = errors();

        assert!(errors.exists_for_path("name"));
        assert!(errors.exists_for_path("endpoint"));
        assert!(!errors.exists_for_path("token"));
    }

    #[test]
    fn test_for_path_is_exact() {
        let errors = errors();

        let rules: Vec<&str> = errors
            .for_path("name")
            .iter()
            .map(|e| e.rule.as_str())
            .collect();
        assert_eq!(rules, vec!["required", "unique"]);
        assert!(errors.for_path("nam").is_empty());
        assert!(errors.for_path("name.first").is_empty());
    }

    #[test]
    fn test_empty() {
        let errors = ValidationErrors::default();

        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(!errors.exists_for_path(""));
    }

    #[test]
    fn test_deserialize_backend_format() {
        let json = r#"[
            {"path": "limit", "message": "too large", "rule": "lte", "params": {"param": "100"}}
        ]"#;

        let errors: ValidationErrors = serde_json::from_str(json).unwrap();

        let limit = errors.for_path("limit");
        assert_eq!(limit.len(), 1);
        assert_eq!(limit[0].rule, "lte");
        assert_eq!(limit[0].params.get("param"), Some("100".to_owned()));
    }

    #[test]
    fn test_deserialize_without_params() {
        let json = r#"[{"path": "name", "message": "required", "rule": "required"}]"#;

        let errors: ValidationErrors = serde_json::from_str(json).unwrap();

        assert!(errors.iter().all(|e| e.params.is_empty()));
    }
}
