//! Polyline simplifier configuration.

use ringtap_core::{DEFAULT_TOLERANCE_UNITS, PathSink, PolylineSimplifier, TOLERANCE_STEP};
use serde::{Deserialize, Serialize};

use crate::validation::{MAX_TOLERANCE_UNITS, MIN_TOLERANCE_UNITS, ValidationResult, check_range};

/// Tolerance for a [`PolylineSimplifier`].
///
/// # TOML Format
///
/// ```toml
/// [simplifier]
/// tolerance_units = 2
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimplifierConfig {
    /// Tolerance in steps of 0.01 (defaults to 1).
    pub tolerance_units: u32,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            tolerance_units: DEFAULT_TOLERANCE_UNITS,
        }
    }
}

impl SimplifierConfig {
    /// Create a config with the given tolerance units.
    pub fn new(tolerance_units: u32) -> Self {
        Self { tolerance_units }
    }

    /// Tolerance the simplifier will use.
    pub fn tolerance(&self) -> f32 {
        TOLERANCE_STEP * self.tolerance_units as f32
    }

    /// Check the tolerance range.
    pub fn validate(&self) -> ValidationResult<()> {
        check_range(
            "simplifier.tolerance_units",
            self.tolerance_units,
            MIN_TOLERANCE_UNITS,
            MAX_TOLERANCE_UNITS,
        )
    }

    /// Create a simplifier that draws into `sink`.
    ///
    /// Call [`validate`](Self::validate) first; this does not check.
    pub fn build<'a, S: PathSink + ?Sized>(&self, sink: &'a mut S) -> PolylineSimplifier<'a, S> {
        PolylineSimplifier::with_tolerance_units(sink, self.tolerance_units)
    }
}
