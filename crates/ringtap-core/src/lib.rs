//! Ringtap Core - real-time-safe buffers and trace simplification
//!
//! This crate provides small building blocks for audio processing and
//! rendering pipelines, designed to run inside a real-time callback with zero
//! allocation on the hot path.
//!
//! # Components
//!
//! ## Buffers
//!
//! - [`BoundedRingBuffer`] - Fixed-capacity history that restarts from index 0 when full
//! - [`SampleDelayLine`] - Variable-length delay on a preallocated circular buffer
//!
//! ## Geometry
//!
//! - [`PolylineSimplifier`] - Online collapse of near-collinear point runs
//! - [`PathSink`] - Two-operation drawing capability the simplifier emits into
//! - [`RecordedPath`] - A sink that records commands
//!
//! ## Errors
//!
//! - [`DelayError`] - Rejected delay line configuration
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringtap-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use ringtap_core::{BoundedRingBuffer, SampleDelayLine};
//!
//! let mut line: SampleDelayLine<f32> = SampleDelayLine::new(4800);
//! line.set_delay(480);
//!
//! let mut recent: BoundedRingBuffer<f32, 64> = BoundedRingBuffer::new();
//! for n in 0..1024 {
//!     let out = line.push(n as f32);
//!     recent.push(out);
//! }
//! assert!(recent.len() <= BoundedRingBuffer::<f32, 64>::capacity());
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Contracts over checks**: Hot-path calls never return errors

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod delay;
pub mod error;
pub mod path;
pub mod ring;

// Re-export main types at crate root
pub use delay::SampleDelayLine;
pub use error::DelayError;
pub use path::{
    DEFAULT_TOLERANCE_UNITS, PathCommand, PathSink, Point, PolylineSimplifier, RecordedPath,
    TOLERANCE_STEP, simplify_into,
};
pub use ring::BoundedRingBuffer;
