//! Delay line configuration in time units.

use ringtap_core::SampleDelayLine;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::{
    MAX_DELAY_MS, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE, ValidationError, ValidationResult,
    check_range, collect_errors,
};

/// Describes a [`SampleDelayLine`] in milliseconds at a sample rate.
///
/// # TOML Format
///
/// ```toml
/// [delay]
/// sample_rate = 48000
/// max_delay_ms = 500.0
/// delay_ms = 120.0
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DelayConfig {
    /// Sample rate in Hz (defaults to 48000).
    pub sample_rate: u32,

    /// Capacity of the line in milliseconds.
    pub max_delay_ms: f32,

    /// Active delay in milliseconds. Must not exceed `max_delay_ms`.
    pub delay_ms: f32,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            max_delay_ms: 1000.0,
            delay_ms: 250.0,
        }
    }
}

fn ms_to_samples(ms: f32, sample_rate: u32) -> f32 {
    ms * sample_rate as f32 / 1000.0
}

impl DelayConfig {
    /// Create a config with the given times at 48 kHz.
    pub fn new(max_delay_ms: f32, delay_ms: f32) -> Self {
        Self {
            max_delay_ms,
            delay_ms,
            ..Self::default()
        }
    }

    /// Set the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Capacity in samples, rounded up and never below one.
    pub fn max_delay_samples(&self) -> usize {
        (libm::ceilf(ms_to_samples(self.max_delay_ms, self.sample_rate)) as usize).max(1)
    }

    /// Active delay in samples, rounded to nearest and never below one.
    pub fn delay_samples(&self) -> usize {
        let samples = libm::roundf(ms_to_samples(self.delay_ms, self.sample_rate)) as usize;
        if samples == 0 {
            tracing::warn!(
                "delay of {} ms rounds to 0 samples at {} Hz, using 1",
                self.delay_ms,
                self.sample_rate
            );
        }
        samples.max(1)
    }

    /// Check every field, collecting all failures.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = check_range(
            "delay.sample_rate",
            self.sample_rate,
            MIN_SAMPLE_RATE,
            MAX_SAMPLE_RATE,
        ) {
            errors.push(e);
        }
        let max_ok = match check_range(
            "delay.max_delay_ms",
            self.max_delay_ms,
            0.0f32,
            MAX_DELAY_MS,
        ) {
            Ok(()) if self.max_delay_ms > 0.0 => true,
            Ok(()) => {
                errors.push(ValidationError::OutOfRange {
                    param: "delay.max_delay_ms".to_string(),
                    value: f64::from(self.max_delay_ms),
                    min: f64::from(f32::MIN_POSITIVE),
                    max: f64::from(MAX_DELAY_MS),
                });
                false
            }
            Err(e) => {
                errors.push(e);
                false
            }
        };
        // Only bound the active delay by a capacity that is itself valid
        let upper = if max_ok { self.max_delay_ms } else { MAX_DELAY_MS };
        if let Err(e) = check_range("delay.delay_ms", self.delay_ms, 0.0f32, upper) {
            errors.push(e);
        }

        collect_errors(errors)
    }

    /// Validate and build a delay line.
    pub fn build<T: Copy + Default>(&self) -> Result<SampleDelayLine<T>, ConfigError> {
        self.validate()?;
        let (max, delay) = (self.max_delay_samples(), self.delay_samples());
        tracing::debug!(
            "delay_build: {} ms / {} ms at {} Hz -> {} / {} samples",
            self.delay_ms,
            self.max_delay_ms,
            self.sample_rate,
            delay,
            max
        );
        Ok(SampleDelayLine::with_delay(max, delay)?)
    }

    /// Validate and reconfigure an existing line.
    ///
    /// The line is only reallocated (and therefore reset) when its capacity
    /// differs from the configured one. Otherwise the history is kept and
    /// only the active delay changes.
    pub fn apply<T: Copy + Default>(
        &self,
        line: &mut SampleDelayLine<T>,
    ) -> Result<(), ConfigError> {
        self.validate()?;
        let max = self.max_delay_samples();
        if line.maximum_delay() != max {
            tracing::debug!(
                "delay_apply: capacity {} -> {} samples",
                line.maximum_delay(),
                max
            );
            line.set_maximum_delay(max)?;
        }
        line.try_set_delay(self.delay_samples())?;
        Ok(())
    }
}
