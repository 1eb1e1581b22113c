//! Typed API contract for the mimisbrunnr backend.
//!
//! This crate declares what the UI expects from the backend without
//! providing a transport:
//!
//! - [`ScmIntegrationsApi`]: Operations on SCM integrations
//! - [`ApiResponse`]: Decoded response envelope with success status,
//!   metadata and [`ValidationErrors`]
//! - Request and entity types
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use mb_api::{ListScmIntegrationsResponse, STATUS_OK};
//!
//! let body = br#"{"data": [], "validation_errors": [
//!     {"path": "limit", "message": "too big", "rule": "lte", "params": {"param": "100"}}
//! ]}"#;
//! let response = ListScmIntegrationsResponse::from_json(400, STATUS_OK, body)?;
//!
//! assert!(!response.was_successful());
//! assert!(response.validation_errors().exists_for_path("limit"));
//! # Ok(())
//! # }
//! ```

mod kv;
mod models;
mod response;
mod validation;

pub use kv::{KvStore, ResponseMeta};
pub use models::{
    CreateScmIntegrationRequest, DEFAULT_LIMIT, DEFAULT_PAGE, ListRequestParameters, MAX_LIMIT,
    ScmIntegration, ScmIntegrationType,
};
pub use response::{
    ApiError, ApiResponse, CreateScmIntegrationResponse, ListScmIntegrationsResponse,
    STATUS_CREATED, STATUS_OK,
};
pub use validation::{ValidationError, ValidationErrors};

/// Operations on SCM integrations (API version 1).
///
/// Implementations perform the request and decode the reply with
/// [`ApiResponse::from_json`]. A reply that carries validation errors is a
/// successful call returning an unsuccessful response, not an `Err`.
pub trait ScmIntegrationsApi {
    /// List one page of integrations.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request cannot be delivered or decoded.
    fn list(
        &self,
        params: &ListRequestParameters,
    ) -> Result<ListScmIntegrationsResponse, ApiError>;

    /// Create an integration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request cannot be delivered or decoded.
    fn create(
        &self,
        request: &CreateScmIntegrationRequest,
    ) -> Result<CreateScmIntegrationResponse, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serves canned bodies and applies client-side validation first.
    struct CannedApi {
        list_body: &'static str,
    }

    impl ScmIntegrationsApi for CannedApi {
        fn list(
            &self,
            params: &ListRequestParameters,
        ) -> Result<ListScmIntegrationsResponse, ApiError> {
            let errors = params.validate();
            if !errors.is_empty() {
                let body = serde_json::json!({ "validation_errors": errors });
                return ApiResponse::from_json(400, STATUS_OK, body.to_string().as_bytes());
            }
            ApiResponse::from_json(200, STATUS_OK, self.list_body.as_bytes())
        }

        fn create(
            &self,
            request: &CreateScmIntegrationRequest,
        ) -> Result<CreateScmIntegrationResponse, ApiError> {
            let body = serde_json::json!({
                "data": {
                    "id": "new",
                    "name": request.name,
                    "type": request.integration_type,
                    "endpoint": request.endpoint,
                    "token": request.token,
                    "created_at": "2022-01-01T00:00:00Z",
                    "updated_at": "2022-01-01T00:00:00Z",
                }
            });
            ApiResponse::from_json(201, STATUS_CREATED, body.to_string().as_bytes())
        }
    }

    fn api() -> CannedApi {
        CannedApi {
            list_body: r#"{"data": [], "meta": {"page": 1}}"#,
        }
    }

    #[test]
    fn test_list_through_trait_object() {
        let api: &dyn ScmIntegrationsApi = &api();

        let response = api.list(&ListRequestParameters::default()).unwrap();

        assert!(response.was_successful());
        assert_eq!(response.meta().get("page"), Some("1".to_owned()));
    }

    #[test]
    fn test_list_invalid_parameters_round_trip_validation_errors() {
        let params = ListRequestParameters {
            page: Some(0),
            limit: None,
        };

        let response = api().list(&params).unwrap();

        assert!(response.did_fail());
        let page = response.validation_errors().for_path("page");
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].params.get("param"), Some("0".to_owned()));
    }

    #[test]
    fn test_create_returns_entity() {
        let request = CreateScmIntegrationRequest {
            name: "Gitlab".to_owned(),
            integration_type: ScmIntegrationType::Gitlab,
            endpoint: "https://gitlab.com".to_owned(),
            token: "t".to_owned(),
        };

        let response = api().create(&request).unwrap();

        assert!(response.was_successful());
        let created = response.into_data().unwrap();
        assert_eq!(created.name, "Gitlab");
        assert_eq!(created.integration_type, ScmIntegrationType::Gitlab);
    }

    /// Backend that cannot be reached.
    struct OfflineApi;

    impl ScmIntegrationsApi for OfflineApi {
        fn list(
            &self,
            _params: &ListRequestParameters,
        ) -> Result<ListScmIntegrationsResponse, ApiError> {
            Err(ApiError::Transport("connection refused".to_owned()))
        }

        fn create(
            &self,
            _request: &CreateScmIntegrationRequest,
        ) -> Result<CreateScmIntegrationResponse, ApiError> {
            Err(ApiError::Transport("connection refused".to_owned()))
        }
    }

    #[test]
    fn test_transport_failure_is_an_error_not_a_response() {
        let api: &dyn ScmIntegrationsApi = &OfflineApi;

        let err = api.list(&ListRequestParameters::default()).unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.to_string(), "Transport error: connection refused");
    }

    #[test]
    fn test_decode_failure_is_distinct_from_transport() {
        let api = CannedApi {
            list_body: "<html>bad gateway</html>",
        };

        let err = api.list(&ListRequestParameters::default()).unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }
}
