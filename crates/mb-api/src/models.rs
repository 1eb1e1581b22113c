//! Request and entity types for SCM integrations.

use serde::{Deserialize, Serialize};

use crate::kv::KvStore;
use crate::validation::{ValidationError, ValidationErrors};

/// Page returned when none is requested.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when none is requested.
pub const DEFAULT_LIMIT: u32 = 20;
/// Largest page size the backend accepts.
pub const MAX_LIMIT: u32 = 100;

/// Kind of source control system behind an integration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmIntegrationType {
    /// GitHub or GitHub Enterprise.
    Github,
    /// GitLab.
    Gitlab,
}

/// SCM integration as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmIntegration {
    /// Integration ID (UUID string).
    pub id: String,
    /// Unique display name.
    pub name: String,
    /// Source control system type.
    #[serde(rename = "type")]
    pub integration_type: ScmIntegrationType,
    /// API endpoint (e.g., `https://github.com`).
    pub endpoint: String,
    /// Access token.
    pub token: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
    /// Last update timestamp (RFC 3339).
    pub updated_at: String,
}

/// Request body for creating an SCM integration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreateScmIntegrationRequest {
    /// Unique display name.
    pub name: String,
    /// Source control system type.
    #[serde(rename = "type")]
    pub integration_type: ScmIntegrationType,
    /// API endpoint.
    pub endpoint: String,
    /// Access token.
    pub token: String,
}

impl CreateScmIntegrationRequest {
    /// Check the fields the client can verify before sending.
    ///
    /// Uniqueness of the name can only be checked by the backend.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let fields = [
            ("name", &self.name),
            ("endpoint", &self.endpoint),
            ("token", &self.token),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(path, _)| ValidationError::new(path, "required", &format!("{path} is required")))
            .collect::<Vec<_>>()
            .into()
    }
}

/// Paging parameters of a list request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListRequestParameters {
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ListRequestParameters {
    /// Page that will be served.
    #[must_use]
    pub fn effective_page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Page size that will be served.
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    /// Check the parameters against the backend's rules.
    ///
    /// `page` must be greater than 0; `limit` must be greater than 0 and at
    /// most [`MAX_LIMIT`].
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = Vec::new();

        if self.page == Some(0) {
            errors.push(
                ValidationError::new("page", "gt", "page must be greater than 0")
                    .with_params([("param", "0")].into_iter().collect::<KvStore>()),
            );
        }

        match self.limit {
            Some(0) => errors.push(
                ValidationError::new("limit", "gt", "limit must be greater than 0")
                    .with_params([("param", "0")].into_iter().collect::<KvStore>()),
            ),
            Some(limit) if limit > MAX_LIMIT => errors.push(
                ValidationError::new(
                    "limit",
                    "lte",
                    &format!("limit must be at most {MAX_LIMIT}"),
                )
                .with_params(
                    [("param", MAX_LIMIT.to_string())]
                        .into_iter()
                        .collect::<KvStore>(),
                ),
            ),
            _ => {}
        }

        errors.into()
    }
}
