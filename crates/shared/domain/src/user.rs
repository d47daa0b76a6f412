//! User domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::age::completed_years;
use crate::constants::DATE_FORMAT;
use crate::validation::validate_date_of_birth;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl User {
    /// Age in completed years as of the given date
    pub fn age_on(&self, as_of: NaiveDate) -> u32 {
        completed_years(self.date_of_birth, as_of)
    }
}

/// Payload for creating a user or fully replacing an existing one.
///
/// Absent fields deserialize as empty strings so validation can report them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserRequest {
    /// Display name (1-100 characters)
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[cfg_attr(feature = "openapi", schema(example = "Ada Lovelace"))]
    pub name: String,
    /// Date of birth as `YYYY-MM-DD`
    #[serde(default)]
    #[validate(custom(function = "validate_date_of_birth"))]
    #[cfg_attr(feature = "openapi", schema(example = "1990-01-10"))]
    pub dob: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    pub id: i32,
    /// User display name
    pub name: String,
    /// Date of birth as `YYYY-MM-DD`
    pub dob: String,
    /// Completed years, present on reads only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl UserResponse {
    /// Response carrying the age computed as of `as_of`
    pub fn with_age(user: User, as_of: NaiveDate) -> Self {
        let age = user.age_on(as_of);
        Self {
            age: Some(age),
            ..Self::from(user)
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            dob: user.date_of_birth.format(DATE_FORMAT).to_string(),
            age: None,
        }
    }
}
