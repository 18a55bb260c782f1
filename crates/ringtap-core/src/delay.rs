//! Variable-length sample delay line.
//!
//! [`SampleDelayLine`] preallocates a circular buffer sized to the maximum
//! delay the caller will ever need, then runs an active delay that can be
//! changed at runtime without touching the allocation.
//!
//! Each [`push`](SampleDelayLine::push) reads the slot under the cursor,
//! overwrites it with the new sample, and advances the cursor modulo the
//! active delay. The line therefore has exactly `delay` samples of latency.
//!
//! # Real-time use
//!
//! | Call | Allocates | Intended thread |
//! |------|-----------|-----------------|
//! | [`set_maximum_delay`](SampleDelayLine::set_maximum_delay) | Yes | Setup / main |
//! | [`set_delay`](SampleDelayLine::set_delay) | No | Any |
//! | [`reset`](SampleDelayLine::reset) | No | Any |
//! | [`push`](SampleDelayLine::push) | No | Audio |
//!
//! Converting a delay time in seconds to samples is the caller's job.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::error::DelayError;

/// Circular-buffer delay with a runtime-adjustable length.
///
/// Generic over the sample type; `T::default()` is the zero sample written
/// by [`reset`](Self::reset).
///
/// # Example
///
/// ```rust
/// use ringtap_core::SampleDelayLine;
///
/// let mut line: SampleDelayLine<f32> = SampleDelayLine::new(64);
/// line.set_delay(3);
///
/// assert_eq!(line.push(1.0), 0.0);
/// assert_eq!(line.push(2.0), 0.0);
/// assert_eq!(line.push(3.0), 0.0);
/// assert_eq!(line.push(4.0), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SampleDelayLine<T> {
    /// Backing store, length is the maximum delay
    states: Vec<T>,
    /// Active delay in samples
    delay: usize,
    /// Slot read and written by the next push
    pos: usize,
}

impl<T: Copy + Default> SampleDelayLine<T> {
    /// Creates a delay line able to hold up to `max_delay` samples.
    ///
    /// The active delay starts at `max_delay`.
    ///
    /// # Panics
    ///
    /// Panics if `max_delay` is 0.
    pub fn new(max_delay: usize) -> Self {
        assert!(max_delay > 0, "Delay size must be > 0");

        Self {
            states: vec![T::default(); max_delay],
            delay: max_delay,
            pos: 0,
        }
    }

    /// Creates a delay line with capacity `max_delay` running at `delay`.
    pub fn with_delay(max_delay: usize, delay: usize) -> Result<Self, DelayError> {
        if max_delay == 0 {
            return Err(DelayError::ZeroLength);
        }
        let mut line = Self::new(max_delay);
        line.try_set_delay(delay)?;
        Ok(line)
    }

    /// Reallocates the backing store to hold `max_delay` samples and resets.
    ///
    /// The active delay is not touched. If it is now larger than
    /// `max_delay`, the caller must lower it before the next push.
    pub fn set_maximum_delay(&mut self, max_delay: usize) -> Result<(), DelayError> {
        if max_delay == 0 {
            return Err(DelayError::ZeroLength);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "delay_realloc: {} -> {} samples (active delay {})",
            self.states.len(),
            max_delay,
            self.delay
        );

        self.states.clear();
        self.states.resize(max_delay, T::default());
        self.pos = 0;
        Ok(())
    }

    /// Sets the active delay in samples.
    ///
    /// Requires `1 <= delay <= maximum_delay()`. The cursor is not clamped:
    /// if it sits past the new length, the next push still reads that slot
    /// and the cursor wraps back into range one sample later. Use
    /// [`try_set_delay`](Self::try_set_delay) for a checked variant.
    #[inline]
    pub fn set_delay(&mut self, delay: usize) {
        debug_assert!(delay > 0, "delay must be at least one sample");
        debug_assert!(
            delay <= self.states.len(),
            "delay {delay} exceeds capacity {}",
            self.states.len()
        );
        self.delay = delay;
    }

    /// Sets the active delay, rejecting values outside `1..=maximum_delay()`.
    ///
    /// State is unchanged on error.
    pub fn try_set_delay(&mut self, delay: usize) -> Result<(), DelayError> {
        if delay == 0 {
            return Err(DelayError::ZeroLength);
        }
        if delay > self.states.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "delay_rejected: {} samples, capacity {}",
                delay,
                self.states.len()
            );
            return Err(DelayError::ExceedsMaximum {
                delay,
                maximum: self.states.len(),
            });
        }
        self.delay = delay;
        Ok(())
    }

    /// Returns the active delay in samples.
    #[inline]
    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Returns the allocated capacity in samples.
    #[inline]
    pub fn maximum_delay(&self) -> usize {
        self.states.len()
    }

    /// Latency introduced by the line, in samples.
    #[inline]
    pub fn latency(&self) -> usize {
        self.delay
    }

    /// Position of the slot the next push will read and overwrite.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.pos
    }

    /// Wraps the cursor back into `0..delay()`.
    ///
    /// [`set_delay`](Self::set_delay) never does this on its own.
    pub fn clamp_cursor(&mut self) {
        self.pos %= self.delay;
    }

    /// Zero-fills the backing store and rewinds the cursor.
    pub fn reset(&mut self) {
        self.states.fill(T::default());
        self.pos = 0;
    }

    /// Processes one sample.
    ///
    /// Returns the sample written `delay()` pushes ago (zero until the line
    /// has filled), then stores `x` in its place.
    ///
    /// # Panics
    ///
    /// Panics if the cursor lies outside the backing store, which only
    /// happens after shrinking the capacity below the active delay.
    #[inline]
    pub fn push(&mut self, x: T) -> T {
        let current = self.states[self.pos];
        self.states[self.pos] = x;
        self.pos = (self.pos + 1) % self.delay;
        current
    }

    /// Runs [`push`](Self::push) over a block in place.
    pub fn process_block(&mut self, block: &mut [T]) {
        for sample in block.iter_mut() {
            *sample = self.push(*sample);
        }
    }
}

impl<T: Copy + Default> Default for SampleDelayLine<T> {
    /// A one-sample line. Call
    /// [`set_maximum_delay`](SampleDelayLine::set_maximum_delay) before use.
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_sample() {
        let mut line: SampleDelayLine<f32> = SampleDelayLine::default();
        assert_eq!(line.maximum_delay(), 1);
        assert_eq!(line.delay(), 1);

        assert_eq!(line.push(1.0), 0.0);
        assert_eq!(line.push(2.0), 1.0);
        assert_eq!(line.push(3.0), 2.0);
    }

    #[test]
    fn test_basic_latency() {
        let mut line: SampleDelayLine<f32> = SampleDelayLine::new(16);
        line.set_delay(4);

        let outputs: Vec<f32> = (1..=10).map(|i| line.push(i as f32)).collect();
        assert_eq!(
            outputs,
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
    }

    #[test]
    fn test_reset_zeroes_history() {
        let mut line: SampleDelayLine<f64> = SampleDelayLine::new(8);
        line.set_delay(3);
        for _ in 0..5 {
            line.push(1.0);
        }

        line.reset();
        assert_eq!(line.cursor(), 0);
        assert_eq!(line.delay(), 3);
        assert_eq!(line.maximum_delay(), 8);

        for _ in 0..3 {
            assert_eq!(line.push(0.5), 0.0);
        }
        assert_eq!(line.push(0.5), 0.5);
    }

    #[test]
    fn test_set_maximum_delay_reallocates_and_resets() {
        let mut line: SampleDelayLine<f32> = SampleDelayLine::default();
        line.set_maximum_delay(32).unwrap();
        line.set_delay(2);
        line.push(7.0);
        line.push(8.0);

        line.set_maximum_delay(64).unwrap();
        assert_eq!(line.maximum_delay(), 64);
        assert_eq!(line.cursor(), 0);
        assert_eq!(line.delay(), 2);
        assert_eq!(line.push(1.0), 0.0);
        assert_eq!(line.push(1.0), 0.0);
    }

    #[test]
    fn test_set_maximum_delay_zero_rejected() {
        let mut line: SampleDelayLine<f32> = SampleDelayLine::new(4);
        assert_eq!(line.set_maximum_delay(0), Err(DelayError::ZeroLength));
        assert_eq!(line.maximum_delay(), 4);
    }

    #[test]
    fn test_try_set_delay_bounds() {
        let mut line: SampleDelayLine<f32> = SampleDelayLine::new(10);
        line.set_delay(5);

        assert_eq!(line.try_set_delay(0), Err(DelayError::ZeroLength));
        assert_eq!(
            line.try_set_delay(11),
            Err(DelayError::ExceedsMaximum {
                delay: 11,
                maximum: 10
            })
        );
        assert_eq!(line.delay(), 5);

        assert_eq!(line.try_set_delay(10), Ok(()));
        assert_eq!(line.delay(), 10);
    }

    #[test]
    fn test_with_delay() {
        let line = SampleDelayLine::<f32>::with_delay(8, 3).unwrap();
        assert_eq!(line.delay(), 3);
        assert_eq!(line.maximum_delay(), 8);

        assert!(SampleDelayLine::<f32>::with_delay(0, 1).is_err());
        assert!(SampleDelayLine::<f32>::with_delay(4, 5).is_err());
    }

    #[test]
    fn test_shrinking_delay_does_not_clamp_cursor() {
        let mut line: SampleDelayLine<i32> = SampleDelayLine::new(8);
        line.set_delay(8);
        for i in 1..=5 {
            line.push(i);
        }
        assert_eq!(line.cursor(), 5);

        // Cursor (5) is now outside the new active range 0..3
        line.set_delay(3);
        assert_eq!(line.cursor(), 5);

        // Reads the stale slot 5 (still zero), then wraps to 0
        assert_eq!(line.push(100), 0);
        assert_eq!(line.cursor(), 0);
        assert_eq!(line.push(101), 1);
        assert_eq!(line.push(102), 2);
        assert_eq!(line.push(103), 3);
        // Steady state with delay 3 from here on
        assert_eq!(line.push(104), 101);
    }

    #[test]
    fn test_clamp_cursor() {
        let mut line: SampleDelayLine<i32> = SampleDelayLine::new(8);
        for i in 0..6 {
            line.push(i);
        }
        line.set_delay(4);
        line.clamp_cursor();
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn test_process_block_matches_push() {
        let mut a: SampleDelayLine<f32> = SampleDelayLine::new(16);
        let mut b = a.clone();
        a.set_delay(5);
        b.set_delay(5);

        let mut block: Vec<f32> = (0..32).map(|i| i as f32 * 0.25).collect();
        let expected: Vec<f32> = block.iter().map(|&x| b.push(x)).collect();
        a.process_block(&mut block);

        assert_eq!(block, expected);
    }

    #[test]
    #[should_panic]
    fn test_zero_size_panics() {
        let _line: SampleDelayLine<f32> = SampleDelayLine::new(0);
    }
}
