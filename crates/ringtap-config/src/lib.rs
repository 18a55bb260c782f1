//! Configuration and validation for ringtap delay lines and trace simplification.
//!
//! The core crate deliberately trusts its inputs. This crate is where delay
//! times, sample rates, and tolerances get described in user-facing units,
//! range-checked, and turned into ready-to-use core objects.
//!
//! # Features
//!
//! - **TOML Documents**: Parse and serialize settings from TOML strings
//! - **Time Units**: Delay lines described in milliseconds at a sample rate
//! - **Validation**: Every out-of-range field reported at once
//!
//! # Example
//!
//! ```rust
//! use ringtap_config::RingtapConfig;
//! use ringtap_core::{RecordedPath, SampleDelayLine};
//!
//! let config = RingtapConfig::from_toml_str(r#"
//!     [delay]
//!     sample_rate = 48000
//!     max_delay_ms = 500.0
//!     delay_ms = 120.0
//!
//!     [simplifier]
//!     tolerance_units = 2
//! "#).unwrap();
//!
//! let line: SampleDelayLine<f32> = config.delay.build().unwrap();
//! assert_eq!(line.delay(), 5760);
//!
//! let mut path = RecordedPath::new();
//! let simplifier = config.simplifier.build(&mut path);
//! assert!((simplifier.tolerance() - 0.02).abs() < 1e-6);
//! ```

mod config;
mod delay_config;
mod error;
mod simplifier_config;

/// Range checks shared by every section.
pub mod validation;

pub use config::RingtapConfig;
pub use delay_config::DelayConfig;
pub use error::ConfigError;
pub use simplifier_config::SimplifierConfig;
pub use validation::{ValidationError, ValidationResult};
