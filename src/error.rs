// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::RepositoryError;

/// Errors surfaced by the blog routes. Handled variants carry a fixed client message;
/// everything else collapses into `Internal`.
#[derive(Debug)]
pub enum ApiError {
    // 403 - token missing, malformed, badly signed or expired
    Unauthorized,

    // 403 - body does not have the expected shape
    InvalidInput,

    // 411 - lookup by id raised
    FetchError,

    // 500 - anything left unhandled (repository failures on create/update/list)
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::FORBIDDEN,
            ApiError::InvalidInput => StatusCode::FORBIDDEN,
            ApiError::FetchError => StatusCode::LENGTH_REQUIRED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "unauthorized",
            ApiError::InvalidInput => "incorrect inputs",
            ApiError::FetchError => "error while fetching blog post",
            ApiError::Internal(_) => "internal server error",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "error": self.message() })
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal(detail.into())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Internal(detail) => write!(f, "{}: {}", self.message(), detail),
            _ => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        if let ApiError::Internal(detail) = &self {
            // Never expose the underlying database error to clients
            tracing::error!("Unhandled error: {}", detail);
        }
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handled_errors_have_fixed_bodies() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::Unauthorized.to_json(), json!({ "error": "unauthorized" }));
        assert_eq!(ApiError::InvalidInput.to_json(), json!({ "error": "incorrect inputs" }));
        assert_eq!(ApiError::FetchError.status_code().as_u16(), 411);
    }

    #[test]
    fn repository_errors_are_unhandled() {
        let err: ApiError = RepositoryError::NotFound("post abc".into()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_json(), json!({ "error": "internal server error" }));
        assert!(err.to_string().contains("post abc"));
    }
}
