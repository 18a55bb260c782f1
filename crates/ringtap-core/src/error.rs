//! Error types for delay line configuration.
//!
//! Only configuration calls report errors. The per-sample path
//! ([`SampleDelayLine::push`](crate::SampleDelayLine::push)) never fails.

/// Errors reported when configuring a [`SampleDelayLine`](crate::SampleDelayLine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayError {
    /// A delay or capacity of zero samples was requested.
    ZeroLength,
    /// The requested delay does not fit in the allocated capacity.
    ExceedsMaximum {
        /// Requested delay in samples.
        delay: usize,
        /// Allocated capacity in samples.
        maximum: usize,
    },
}

impl core::fmt::Display for DelayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "delay length must be at least one sample"),
            Self::ExceedsMaximum { delay, maximum } => write!(
                f,
                "delay of {delay} samples exceeds maximum of {maximum} samples"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DelayError {}
