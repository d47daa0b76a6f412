//! Request validation and strict date parsing.
//!
//! Field rules are declared with `validator` derives on the request types;
//! this module runs them and turns the result into a [`DomainError`] that
//! names every failing field.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::DATE_FORMAT;
use crate::error::{DomainError, DomainResult};

/// Exact `YYYY-MM-DD` shape; chrono alone accepts unpadded fields.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// Run the declared field rules of `payload`.
///
/// On failure the error message lists each failing field (alphabetically)
/// together with the reason, e.g. `dob: ...; name: ...`.
pub fn validate<T: Validate>(payload: &T) -> DomainResult<()> {
    payload
        .validate()
        .map_err(|errors| DomainError::validation(describe(&errors)))
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    if !DATE_SHAPE.is_match(value) {
        return Err(DomainError::invalid_date(value));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| DomainError::invalid_date(value))
}

/// Field rule for date of birth strings.
pub fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        let mut error = ValidationError::new("required");
        error.message = Some("dob is required".into());
        return Err(error);
    }

    parse_date(value).map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("date");
        error.message = Some("dob must be a valid date in YYYY-MM-DD format".into());
        error
    })
}

fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let reasons = errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{} failed {} check", field, error.code),
                })
                .collect::<Vec<_>>()
                .join(", ");
            (field.to_string(), reasons)
        })
        .collect();

    fields.sort();

    fields
        .into_iter()
        .map(|(field, reasons)| format!("{}: {}", field, reasons))
        .collect::<Vec<_>>()
        .join("; ")
}
