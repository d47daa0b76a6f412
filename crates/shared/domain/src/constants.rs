//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement
pub const MIN_NAME_LENGTH: usize = 1;

/// Maximum name length requirement
pub const MAX_NAME_LENGTH: usize = 100;

/// Calendar date layout accepted and produced for date of birth (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Listing
// =============================================================================

/// Number of users returned by a list call when no valid limit is given
pub const DEFAULT_LIST_LIMIT: u64 = 50;

/// Starting offset for a list call when no valid offset is given
pub const DEFAULT_LIST_OFFSET: u64 = 0;
