//! Top-level configuration document.

use serde::{Deserialize, Serialize};

use crate::delay_config::DelayConfig;
use crate::error::ConfigError;
use crate::simplifier_config::SimplifierConfig;
use crate::validation::{ValidationResult, collect_errors};

/// All ringtap settings in one TOML document.
///
/// Missing tables and fields fall back to their defaults.
///
/// # TOML Format
///
/// ```toml
/// [delay]
/// sample_rate = 48000
/// max_delay_ms = 500.0
/// delay_ms = 120.0
///
/// [simplifier]
/// tolerance_units = 2
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RingtapConfig {
    /// Delay line settings.
    pub delay: DelayConfig,

    /// Trace simplifier settings.
    pub simplifier: SimplifierConfig,
}

impl RingtapConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: RingtapConfig = toml::from_str(toml_str)?;
        config.validate()?;
        tracing::debug!(
            "config_parsed: delay {} ms (max {} ms) at {} Hz, tolerance units {}",
            config.delay.delay_ms,
            config.delay.max_delay_ms,
            config.delay.sample_rate,
            config.simplifier.tolerance_units
        );
        Ok(config)
    }

    /// Convert the config to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate every section, collecting all failures.
    pub fn validate(&self) -> ValidationResult<()> {
        let errors = [self.delay.validate(), self.simplifier.validate()]
            .into_iter()
            .filter_map(Result::err)
            .collect();
        collect_errors(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn test_empty_document_is_default() {
        let config = RingtapConfig::from_toml_str("").unwrap();
        assert_eq!(config, RingtapConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = RingtapConfig::from_toml_str(
            r#"
            [delay]
            delay_ms = 10.0
            "#,
        )
        .unwrap();
        assert_eq!(config.delay.delay_ms, 10.0);
        assert_eq!(config.delay.max_delay_ms, 1000.0);
        assert_eq!(config.delay.sample_rate, 48000);
        assert_eq!(config.simplifier, SimplifierConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = RingtapConfig::from_toml_str("[delay\nsample_rate = ");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_wrong_type() {
        let result = RingtapConfig::from_toml_str("[simplifier]\ntolerance_units = \"wide\"");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_validation_spans_sections() {
        let config = RingtapConfig {
            delay: DelayConfig::new(10.0, 50.0),
            simplifier: SimplifierConfig::new(0),
        };
        match config.validate() {
            Err(ValidationError::Multiple(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected two errors, got {other:?}"),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RingtapConfig {
            delay: DelayConfig::new(500.0, 120.0).with_sample_rate(96000),
            simplifier: SimplifierConfig::new(3),
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[delay]"));
        assert!(text.contains("sample_rate = 96000"));
        assert_eq!(RingtapConfig::from_toml_str(&text).unwrap(), config);
    }
}
