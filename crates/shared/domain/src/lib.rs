//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity and its wire types, request validation, and the age
//! calculation derived from a date of birth.

pub mod age;
pub mod clock;
pub mod constants;
pub mod error;
pub mod user;
pub mod validation;

pub use age::completed_years;
pub use clock::{Clock, FixedClock, SystemClock};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use user::{User, UserRequest, UserResponse};
