//! Error types for the timed cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache and its HTTP front-end.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The reaper interval must be strictly positive
    #[error("Invalid interval: reaper interval must be greater than zero")]
    InvalidInterval,

    /// The reaper interval is too large to schedule ticks for
    #[error("Invalid interval: reaper interval is too large to schedule")]
    IntervalTooLarge,

    /// The cache was constructed outside of a tokio runtime
    #[error("No tokio runtime available to drive the reaper")]
    RuntimeUnavailable,

    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidInterval
            | CacheError::IntervalTooLarge
            | CacheError::RuntimeUnavailable => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the timed cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (CacheError::NotFound("key".to_string()), StatusCode::NOT_FOUND),
            (CacheError::InvalidInterval, StatusCode::INTERNAL_SERVER_ERROR),
            (CacheError::IntervalTooLarge, StatusCode::INTERNAL_SERVER_ERROR),
            (
                CacheError::RuntimeUnavailable,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::NotFound("abc".to_string()).to_string(),
            "Key not found: abc"
        );
        assert!(CacheError::InvalidInterval
            .to_string()
            .contains("greater than zero"));
    }
}
