//! Input validation helpers
//!
//! Presence checks only. A value counts as missing when it is absent, `null`,
//! an empty string or a numeric zero, so `{"wage": 0}` is rejected the same
//! way as a body without `wage`.

use crate::utils::AppError;

/// Unwrap a request envelope such as `{"menu": {...}}`.
pub fn require_body<T>(value: Option<T>, envelope: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::validation(format!("{envelope} is required")))
}

/// Validate that a required string is present and non-empty.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

/// Validate that a required number is present and non-zero.
pub fn require_number(value: Option<f64>, field: &str) -> Result<f64, AppError> {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => Ok(v),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

/// Validate that a required integer is present and non-zero.
pub fn require_integer(value: Option<i64>, field: &str) -> Result<i64, AppError> {
    match value {
        Some(v) if v != 0 => Ok(v),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}
