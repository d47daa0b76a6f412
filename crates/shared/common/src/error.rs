//! Unified error handling for the HTTP boundary.
//!
//! Provides a single error type that services return and that converts
//! into an Axum HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    // External service errors
    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body for HTTP
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            #[cfg(feature = "database")]
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            AppError::Validation(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),

            // Hide details for internal errors
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::Validation(msg),
            DomainError::InvalidDate(value) => {
                AppError::BadRequest(format!("'{}' is not a YYYY-MM-DD date", value))
            }
            DomainError::NotFound(entity) => AppError::NotFound(entity),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait turning a missing record into a domain `NotFound`
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| DomainError::not_found(entity).into())
    }
}

/// Convenience constructors
impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_names_resource() {
        let (status, body) = body_json(AppError::NotFound("User 42".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "User 42 not found");
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let (status, body) = body_json(AppError::internal("pool exhausted at 10.0.0.3")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "An internal error occurred");
    }

    #[test]
    fn test_domain_errors_map_to_client_errors() {
        let validation = AppError::from(DomainError::validation("name: too short"));
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.user_message(), "name: too short");

        let date = AppError::from(DomainError::invalid_date("nope"));
        assert_eq!(date.code(), "BAD_REQUEST");
        assert_eq!(date.status(), StatusCode::BAD_REQUEST);

        let missing = AppError::from(DomainError::not_found("User 1"));
        assert!(matches!(missing, AppError::NotFound(ref e) if e == "User 1"));
    }

    #[test]
    fn test_option_ext() {
        let found: AppResult<i32> = Some(1).ok_or_not_found("User 1");
        assert_eq!(found.unwrap(), 1);

        let missing: AppResult<i32> = None.ok_or_not_found("User 2");
        let err = missing.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref e) if e == "User 2"));
        assert_eq!(err.user_message(), "User 2 not found");
    }
}
