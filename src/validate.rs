//! Parameter validation performed before any request is sent.

use crate::error::{Error, Result};

/// Minimum length of a region or country identifier.
pub const IDENTIFIER_MIN_LENGTH: usize = 3;

/// Maximum length of a region or country identifier.
pub const IDENTIFIER_MAX_LENGTH: usize = 30;

/// Minimum length of an API token.
pub const API_TOKEN_MIN_LENGTH: usize = 10;

/// Maximum length of an API token.
pub const API_TOKEN_MAX_LENGTH: usize = 700;

/// Smallest accepted `limit`.
pub const LIMIT_MIN: i64 = 1;

/// Largest accepted `limit`.
pub const LIMIT_MAX: i64 = 100;

/// `limit` used when the caller does not supply one.
pub const DEFAULT_LIMIT: i64 = 1;

/// Check that `value` is a usable identifier.
///
/// The value must be non-empty after trimming, contain no space character and
/// be between `min_length` and `max_length` characters long (inclusive).
///
/// Length is counted in Unicode scalar values, so a character outside the
/// Basic Multilingual Plane counts once rather than as two UTF-16 units.
pub fn validate_identifier(
    value: &str,
    label: &str,
    min_length: usize,
    max_length: usize,
) -> Result<()> {
    let length = value.chars().count();

    if value.trim().is_empty()
        || value.contains(' ')
        || length < min_length
        || length > max_length
    {
        return Err(Error::Validation(format!(
            "Invalid '{}': must be a non-empty string without spaces, between {} and {} characters long.",
            label, min_length, max_length
        )));
    }

    Ok(())
}

/// Resolve and check a `limit`, defaulting to [`DEFAULT_LIMIT`].
pub fn validate_limit(value: Option<i64>, min: i64, max: i64) -> Result<u32> {
    let value = value.unwrap_or(DEFAULT_LIMIT);
    let invalid = || {
        Error::Validation(format!(
            "Invalid 'limit': must be an integer between {} and {}.",
            min, max
        ))
    };

    if value < min || value > max {
        return Err(invalid());
    }

    u32::try_from(value).map_err(|_| invalid())
}
