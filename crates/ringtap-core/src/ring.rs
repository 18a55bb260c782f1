//! Fixed-capacity history buffer with reset-on-full wraparound.
//!
//! [`BoundedRingBuffer`] stores up to `N` values inline. When it is full, the
//! next [`push`](BoundedRingBuffer::push) restarts the run at index 0 instead
//! of sliding a window over the oldest entry. Consumers re-read
//! [`len`](BoundedRingBuffer::len) each time and only ever observe a
//! monotonically growing run `0..len` between resets.
//!
//! # Example
//!
//! ```rust
//! use ringtap_core::BoundedRingBuffer;
//!
//! let mut history: BoundedRingBuffer<f32, 4> = BoundedRingBuffer::new();
//! for x in [1.0, 2.0, 3.0, 4.0] {
//!     history.push(x);
//! }
//! assert!(history.is_full());
//!
//! // Fifth push resets the run
//! history.push(5.0);
//! assert_eq!(history.len(), 1);
//! assert_eq!(history.read(0), 5.0);
//! ```

use core::ops::Index;

/// Bounded container that overwrites from the start once it reaches `N`.
///
/// No allocation happens after construction and every operation is O(1)
/// except [`assign_from`](Self::assign_from), which copies the live run.
#[derive(Debug, Clone, Copy)]
pub struct BoundedRingBuffer<T, const N: usize> {
    data: [T; N],
    size: usize,
}

impl<T: Copy + Default, const N: usize> BoundedRingBuffer<T, N> {
    /// Creates an empty buffer with default-initialized storage.
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            size: 0,
        }
    }

    /// Appends a value.
    ///
    /// If the buffer is full the run restarts: `len` drops to 0 before the
    /// write, so the value lands at index 0 and `len` becomes 1.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.size == N {
            self.size = 0;
        }
        self.data[self.size] = value;
        self.size += 1;
    }

    /// Returns the value stored at `index`.
    ///
    /// Callers must keep `index < len()`. Slots in `len()..N` hold stale
    /// values from before the last reset and are meaningless.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn read(&self, index: usize) -> T {
        debug_assert!(index < self.size, "index {index} outside live run 0..{}", self.size);
        self.data[index]
    }

    /// Returns the value at `index` if it is inside the live run.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Empties the buffer. Storage is left as-is until overwritten.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Copies the live run and length of `other` into `self`.
    ///
    /// Slots past `other.len()` keep whatever `self` held before.
    pub fn assign_from(&mut self, other: &Self) {
        self.data[..other.size].copy_from_slice(other.as_slice());
        self.size = other.size;
    }

    /// Returns the live run `0..len()` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.size]
    }

    /// Iterates over the live run in write order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T, const N: usize> BoundedRingBuffer<T, N> {
    /// Returns the compile-time capacity `N`.
    pub const fn capacity() -> usize {
        N
    }

    /// Number of values pushed since the last reset or clear.
    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if no values are live.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if the next push will restart the run.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.size == N
    }
}

impl<T: Copy + Default, const N: usize> Default for BoundedRingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Index<usize> for BoundedRingBuffer<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < self.size, "index {index} outside live run 0..{}", self.size);
        &self.data[index]
    }
}

impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for BoundedRingBuffer<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a BoundedRingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
