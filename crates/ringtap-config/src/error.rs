//! Error types for configuration operations.

use ringtap_core::DelayError;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Validation errors
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),

    /// The delay line rejected the converted sample counts
    #[error("delay line configuration rejected: {0}")]
    Delay(#[from] DelayError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;
    use std::error::Error;

    #[test]
    fn toml_parse_display() {
        let err: ConfigError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        let msg = err.to_string();
        assert!(msg.starts_with("failed to parse TOML"), "got: {msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn validation_display() {
        let err = ConfigError::from(ValidationError::OutOfRange {
            param: "delay.sample_rate".to_string(),
            value: 10.0,
            min: 8000.0,
            max: 384000.0,
        });
        assert_eq!(
            err.to_string(),
            "validation failed: parameter 'delay.sample_rate' value 10 out of range [8000, 384000]"
        );
    }

    #[test]
    fn delay_display_and_source() {
        let err = ConfigError::from(DelayError::ExceedsMaximum {
            delay: 9,
            maximum: 4,
        });
        assert_eq!(
            err.to_string(),
            "delay line configuration rejected: delay of 9 samples exceeds maximum of 4 samples"
        );
        assert!(err.source().is_some());
    }
}
