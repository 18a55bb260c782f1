//! Range checks for configuration values.
//!
//! The core types assume their inputs are sane and never check on the hot
//! path. These checks run once, before a configuration reaches them.

use thiserror::Error;

/// Lowest sample rate accepted, in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;
/// Highest sample rate accepted, in Hz.
pub const MAX_SAMPLE_RATE: u32 = 384_000;
/// Longest delay line accepted, in milliseconds.
pub const MAX_DELAY_MS: f32 = 60_000.0;
/// Lowest simplifier tolerance, in units of 0.01.
pub const MIN_TOLERANCE_UNITS: u32 = 1;
/// Highest simplifier tolerance, in units of 0.01.
pub const MAX_TOLERANCE_UNITS: u32 = 1000;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Dotted name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Parameter is not a finite number.
    #[error("parameter '{param}' must be finite")]
    NotFinite {
        /// Dotted name of the parameter.
        param: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that `value` lies in `[min, max]`.
pub fn check_range(
    param: &str,
    value: impl Into<f64>,
    min: impl Into<f64>,
    max: impl Into<f64>,
) -> ValidationResult<()> {
    let (value, min, max) = (value.into(), min.into(), max.into());
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            param: param.to_string(),
        });
    }
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            param: param.to_string(),
            value,
            min,
            max,
        })
    }
}

/// Folds a list of errors into one.
///
/// No errors is `Ok`, one error is returned as-is, several become
/// [`ValidationError::Multiple`]. Nested `Multiple`s are flattened.
pub fn collect_errors(errors: Vec<ValidationError>) -> ValidationResult<()> {
    let mut flat = Vec::with_capacity(errors.len());
    for err in errors {
        match err {
            ValidationError::Multiple(inner) => flat.extend(inner),
            other => flat.push(other),
        }
    }

    match flat.len() {
        0 => Ok(()),
        1 => Err(flat.remove(0)),
        _ => Err(ValidationError::Multiple(flat)),
    }
}
