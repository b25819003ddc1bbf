use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use service::errors::{ErrorKind, ServiceError};

/// JSON error body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: Option<String>) -> Self {
        Self { status, body: ErrorBody { error: title.into(), detail, code: None } }
    }

    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Validation Error", Some(detail.into()))
    }

    pub fn unauthorized(detail: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Unauthorized", Some(detail.to_string()))
    }

    fn with_code(mut self, code: u16) -> Self {
        self.body.code = Some(code);
        self
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let kind = e.kind();
        let err = match kind {
            ErrorKind::OnlySuperuser | ErrorKind::AccessDenied => {
                JsonApiError::new(StatusCode::FORBIDDEN, "Forbidden", Some(kind.as_str().to_string()))
            }
            ErrorKind::InvalidInput => JsonApiError::validation(e.context().unwrap_or(kind.as_str())),
            ErrorKind::CompanyNotFound => {
                JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(kind.as_str().to_string()))
            }
            ErrorKind::Internal => {
                // cause stays in logs
                error!(error = %e, code = kind.code(), "request failed");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        };
        err.with_code(kind.code())
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::errors::RepositoryError;

    #[test]
    fn maps_service_kinds_to_status() {
        assert_eq!(JsonApiError::from(ServiceError::only_superuser()).status, StatusCode::FORBIDDEN);
        assert_eq!(JsonApiError::from(ServiceError::access_denied()).status, StatusCode::FORBIDDEN);
        assert_eq!(JsonApiError::from(ServiceError::company_not_found()).status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_input_is_a_bad_request_with_reason() {
        let api = JsonApiError::from(ServiceError::invalid_input("name required"));
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.body.detail.as_deref(), Some("name required"));
        assert_eq!(api.body.code, Some(ErrorKind::InvalidInput.code()));
    }

    #[test]
    fn internal_cause_is_not_exposed() {
        let e = ServiceError::internal("Create - repository error", RepositoryError::Db("password=hunter2".into()));
        let api = JsonApiError::from(e);
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api.body.detail.is_none());
        assert_eq!(api.body.code, Some(ErrorKind::Internal.code()));
    }
}
