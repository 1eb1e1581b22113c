//! Response envelope shared by all endpoints.
//!
//! Every response body has the same shape:
//!
//! ```json
//! {"data": ..., "meta": {...}, "validation_errors": [...]}
//! ```
//!
//! Failed requests may instead carry `{"message": "...", "errors": [...]}`.
//! Whether a request succeeded is decided by the status code alone, so it
//! can be checked without touching the payload.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::kv::ResponseMeta;
use crate::models::ScmIntegration;
use crate::validation::ValidationErrors;

/// Status code of a successful read.
pub const STATUS_OK: u16 = 200;
/// Status code of a successful create.
pub const STATUS_CREATED: u16 = 201;

/// Error returned when a response cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body is not valid JSON of the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// Request could not be delivered.
    #[error("Transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Deserialize)]
#[serde(bound = "T: DeserializeOwned")]
struct Envelope<T> {
    #[serde(default)]
    data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    meta: ResponseMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    validation_errors: ValidationErrors,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<String>,
}

/// The backend encodes empty collections as `null`.
fn null_as_default<'de, D, V>(deserializer: D) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: Default + Deserialize<'de>,
{
    Ok(Option::<V>::deserialize(deserializer)?.unwrap_or_default())
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            meta: ResponseMeta::default(),
            validation_errors: ValidationErrors::default(),
            message: None,
            errors: Vec::new(),
        }
    }
}

/// Decoded API response.
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: u16,
    expected_status: u16,
    envelope: Envelope<T>,
}

/// Response of listing SCM integrations.
pub type ListScmIntegrationsResponse = ApiResponse<Vec<ScmIntegration>>;

/// Response of creating an SCM integration.
pub type CreateScmIntegrationResponse = ApiResponse<ScmIntegration>;

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Decode a response.
    ///
    /// An empty body is accepted and treated as carrying no data.
    ///
    /// # Arguments
    ///
    /// * `status` - HTTP status code received
    /// * `expected_status` - Status code that signals success for this endpoint
    /// * `body` - Raw response body
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if a non-empty body is not a valid envelope.
    pub fn from_json(status: u16, expected_status: u16, body: &[u8]) -> Result<Self, ApiError> {
        let envelope = if body.iter().all(u8::is_ascii_whitespace) {
            Envelope::default()
        } else {
            serde_json::from_slice(body)?
        };

        Ok(Self {
            status,
            expected_status,
            envelope,
        })
    }
}

impl<T> ApiResponse<T> {
    /// Status code received.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status code is the one expected for success.
    #[must_use]
    pub fn was_successful(&self) -> bool {
        self.status == self.expected_status
    }

    /// Inverse of [`was_successful`](Self::was_successful).
    #[must_use]
    pub fn did_fail(&self) -> bool {
        !self.was_successful()
    }

    /// Payload, if any.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        self.envelope.data.as_ref()
    }

    /// Take ownership of the payload.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.envelope.data
    }

    /// Response metadata (e.g., paging).
    #[must_use]
    pub fn meta(&self) -> &ResponseMeta {
        &self.envelope.meta
    }

    /// Field validation errors.
    #[must_use]
    pub fn validation_errors(&self) -> &ValidationErrors {
        &self.envelope.validation_errors
    }

    /// General error messages, led by the top-level message if present.
    #[must_use]
    pub fn errors(&self) -> Vec<&str> {
        self.envelope
            .message
            .iter()
            .chain(&self.envelope.errors)
            .map(String::as_str)
            .collect()
    }
}

impl ListScmIntegrationsResponse {
    /// Integrations on this page. Empty when the response has no payload.
    #[must_use]
    pub fn integrations(&self) -> &[ScmIntegration] {
        self.data().map(Vec::as_slice).unwrap_or_default()
    }
}
