//! Online polyline simplification for rendered traces.
//!
//! [`PolylineSimplifier`] sits between a point generator (a waveform or
//! spectrum trace) and a drawing sink. It keeps a tentative straight run
//! from an anchor point to the most recent point and only emits a segment
//! when a new point bends the run by more than the tolerance.
//!
//! The deviation test interpolates along x, not along the perpendicular, so
//! the simplifier is meant for streams whose x coordinate increases
//! monotonically. It is single-pass with O(1) memory and O(1) work per point.
//!
//! # Example
//!
//! ```rust
//! use ringtap_core::{PathCommand, PolylineSimplifier, RecordedPath};
//!
//! let mut path = RecordedPath::new();
//! let mut simplifier = PolylineSimplifier::new(&mut path);
//!
//! simplifier.start_new_sub_path(0.0, 0.0, true);
//! for i in 1..=100 {
//!     simplifier.line_to(i as f32, 2.0 * i as f32);
//! }
//! simplifier.finish();
//!
//! assert_eq!(
//!     path.commands(),
//!     &[PathCommand::MoveTo(0.0, 0.0), PathCommand::LineTo(100.0, 200.0)]
//! );
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Tolerance contributed by one tolerance unit.
pub const TOLERANCE_STEP: f32 = 0.01;

/// Tolerance units used by [`PolylineSimplifier::new`].
pub const DEFAULT_TOLERANCE_UNITS: u32 = 1;

/// A drawing target that accepts simplified geometry.
///
/// This is the only thing the simplifier needs from a rendering toolkit.
pub trait PathSink {
    /// Starts a new contour at `(x, y)`.
    fn move_to(&mut self, x: f32, y: f32);

    /// Draws a straight segment from the previous point to `(x, y)`.
    fn line_to(&mut self, x: f32, y: f32);
}

impl<S: PathSink + ?Sized> PathSink for &mut S {
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) {
        (**self).move_to(x, y);
    }

    #[inline]
    fn line_to(&mut self, x: f32, y: f32) {
        (**self).line_to(x, y);
    }
}

/// A 2-D point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A single command recorded by [`RecordedPath`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start of a contour.
    MoveTo(f32, f32),
    /// Straight segment to a point.
    LineTo(f32, f32),
}

/// A [`PathSink`] that stores every command it receives.
///
/// Useful for tests and for handing geometry to a renderer after the pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPath {
    commands: Vec<PathCommand>,
}

impl RecordedPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of `LineTo` commands recorded.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::LineTo(..)))
            .count()
    }

    /// Removes all commands, keeping the allocation.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PathSink for RecordedPath {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(x, y));
    }
}

/// Collapses near-collinear runs of points into single segments.
///
/// A pass is [`start_new_sub_path`](Self::start_new_sub_path), any number of
/// [`line_to`](Self::line_to) calls, then exactly one
/// [`finish`](Self::finish) to flush the pending segment. Further sub-paths
/// may be started on the same simplifier before finishing.
pub struct PolylineSimplifier<'a, S: PathSink + ?Sized> {
    sink: &'a mut S,
    tolerance: f32,
    anchor: Point,
    current: Point,
    open: bool,
}

impl<'a, S: PathSink + ?Sized> PolylineSimplifier<'a, S> {
    /// Creates a simplifier with [`DEFAULT_TOLERANCE_UNITS`].
    pub fn new(sink: &'a mut S) -> Self {
        Self::with_tolerance_units(sink, DEFAULT_TOLERANCE_UNITS)
    }

    /// Creates a simplifier whose tolerance is `units * TOLERANCE_STEP`.
    pub fn with_tolerance_units(sink: &'a mut S, units: u32) -> Self {
        Self {
            sink,
            tolerance: TOLERANCE_STEP * units as f32,
            anchor: Point::default(),
            current: Point::default(),
            open: false,
        }
    }

    /// Maximum vertical deviation tolerated before a segment is emitted.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Start of the tentative run.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Most recent accepted point.
    pub fn current(&self) -> Point {
        self.current
    }

    /// Returns true once a sub-path has been started.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Begins a run at `(x, y)`.
    ///
    /// With `first` the sink gets a `move_to`; otherwise the new run is
    /// joined to the previous contour with a `line_to`. The point is emitted
    /// unconditionally.
    pub fn start_new_sub_path(&mut self, x: f32, y: f32, first: bool) {
        if first {
            self.sink.move_to(x, y);
        } else {
            self.sink.line_to(x, y);
        }
        self.anchor = Point::new(x, y);
        self.current = self.anchor;
        self.open = true;
    }

    /// Offers the next point of the trace.
    ///
    /// If the current point strays more than [`tolerance`](Self::tolerance)
    /// from the line between the anchor and `(x, y)`, the current point is
    /// emitted and the run restarts from `(x, y)`.
    #[inline]
    pub fn line_to(&mut self, x: f32, y: f32) {
        debug_assert!(self.open, "line_to before start_new_sub_path");

        let w = (self.current.x - self.anchor.x) / (x - self.anchor.x);
        let expected = (1.0 - w) * self.anchor.y + w * y;
        // NaN (x == anchor.x) never exceeds the tolerance
        if libm::fabsf(expected - self.current.y) > self.tolerance {
            self.sink.line_to(self.current.x, self.current.y);
            self.anchor = Point::new(x, y);
        }
        self.current = Point::new(x, y);
    }

    /// Emits the pending segment to the last accepted point.
    pub fn finish(self) {
        debug_assert!(self.open, "finish before start_new_sub_path");
        self.sink.line_to(self.current.x, self.current.y);
    }
}

/// Runs a full simplification pass over `points` into `sink`.
///
/// The first point starts the path with a `move_to`. Nothing is emitted for
/// an empty iterator.
pub fn simplify_into<S, I, P>(points: I, sink: &mut S, tolerance_units: u32)
where
    S: PathSink + ?Sized,
    I: IntoIterator<Item = P>,
    P: Into<Point>,
{
    let mut points = points.into_iter().map(Into::<Point>::into);
    let Some(first) = points.next() else {
        return;
    };

    let mut simplifier = PolylineSimplifier::with_tolerance_units(sink, tolerance_units);
    simplifier.start_new_sub_path(first.x, first.y, true);
    for p in points {
        simplifier.line_to(p.x, p.y);
    }
    simplifier.finish();
}
