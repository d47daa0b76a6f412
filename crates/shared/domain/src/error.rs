//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more request fields failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date string could not be parsed as a calendar date
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }

    /// Create an invalid date error
    pub fn invalid_date(value: impl Into<String>) -> Self {
        DomainError::InvalidDate(value.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>) -> Self {
        DomainError::NotFound(entity.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
