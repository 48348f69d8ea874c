// src/buffer/core.rs
//! Core buffer structure: one allocation, one owner
//!
//! This module provides the fundamental [`Buffer`] type. A buffer owns exactly
//! one contiguous allocation of `size()` elements and never resizes in place:
//! "resizing" means building a new buffer and swapping ownership.

use crate::error::{ArrayError, Result};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A fixed-capacity allocation with exclusive ownership.
///
/// `Buffer` deliberately does not implement [`Clone`]: duplicating the
/// underlying allocation handle is forbidden, and the only sanctioned ways to
/// produce a second buffer with related contents are the copying constructors
/// ([`copy_of`](Self::copy_of), [`copy_truncated`](Self::copy_truncated)),
/// which always allocate an independent copy. Ownership moves between two
/// live buffers only via [`swap`](Self::swap).
///
/// The allocation is released exactly once, either by an explicit
/// [`clear`](Self::clear) or when the buffer is dropped.
///
/// # Examples
///
/// ```
/// use dynarr::Buffer;
///
/// let mut buf: Buffer<u32> = Buffer::new(8);
/// assert_eq!(buf.size(), 8);
/// buf[0] = 42;
/// assert_eq!(buf[0], 42);
/// ```
pub struct Buffer<T> {
    /// The owned allocation; capacity is always exactly `data.len()`
    pub(crate) data: Box<[T]>,
}

impl<T> Buffer<T> {
    /// Returns the capacity of the buffer.
    ///
    /// This is the total number of allocated slots, not a logical length —
    /// tracking how many slots are meaningful is the dynamic array's concern.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::Buffer;
    ///
    /// let buf: Buffer<i64> = Buffer::new(12);
    /// assert_eq!(buf.size(), 12);
    /// ```
    #[inline(always)]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Exchanges ownership of the allocations of two buffers in constant time.
    ///
    /// No elements are copied or moved individually.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::Buffer;
    ///
    /// let mut a: Buffer<u8> = Buffer::new(4);
    /// let mut b: Buffer<u8> = Buffer::new(9);
    /// a.swap(&mut b);
    /// assert_eq!(a.size(), 9);
    /// assert_eq!(b.size(), 4);
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Buffer<T>) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Releases the allocation and resets the capacity to 0.
    ///
    /// Safe to call on an already-empty buffer; idempotent.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::Buffer;
    ///
    /// let mut buf: Buffer<u32> = Buffer::new(16);
    /// buf.clear();
    /// assert_eq!(buf.size(), 0);
    /// buf.clear();
    /// assert_eq!(buf.size(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.data = Box::default();
    }

    /// Returns the whole allocation as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the whole allocation as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Default> Buffer<T> {
    /// Creates a buffer of exactly `capacity` default-initialized elements.
    ///
    /// A capacity of 0 performs no allocation. Allocation failure propagates
    /// unchanged from the allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::Buffer;
    ///
    /// let buf: Buffer<u32> = Buffer::new(8);
    /// assert_eq!(buf.size(), 8);
    /// assert_eq!(buf[3], 0);
    ///
    /// let empty: Buffer<u32> = Buffer::new(0);
    /// assert_eq!(empty.size(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            data: std::iter::repeat_with(T::default).take(capacity).collect(),
        }
    }
}

impl<T: Default + Clone> Buffer<T> {
    /// Creates a buffer of `capacity` elements, copying `min(capacity,
    /// source.size())` elements from the front of `source`.
    ///
    /// The copy is independent of `source`: clearing or mutating `source`
    /// afterwards does not affect the new buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::Buffer;
    ///
    /// let mut src: Buffer<u32> = Buffer::new(3);
    /// src[0] = 1;
    /// src[1] = 2;
    /// src[2] = 3;
    ///
    /// let copy = Buffer::copy_of(5, &src);
    /// src.clear();
    /// assert_eq!(copy.size(), 5);
    /// assert_eq!(copy.as_slice()[..3], [1, 2, 3]);
    /// ```
    pub fn copy_of(capacity: usize, source: &Buffer<T>) -> Self {
        Self::copy_clamped(capacity, source.size(), source)
    }

    /// Creates a buffer of `capacity` elements, copying `min(capacity,
    /// elements_to_copy)` elements from the front of `source`.
    ///
    /// A capacity of 0 performs no allocation and attempts no copy,
    /// regardless of `elements_to_copy`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CopyExceedsSource`] if `elements_to_copy`
    /// exceeds the source's capacity (and `capacity > 0`) — the request would
    /// read past the source's valid range.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::Buffer;
    /// # use dynarr::ArrayError;
    ///
    /// let src: Buffer<u32> = Buffer::new(7);
    /// let copy = Buffer::copy_truncated(10, 5, &src)?;
    /// assert_eq!(copy.size(), 10);
    ///
    /// assert!(Buffer::copy_truncated(10, 8, &src).is_err());
    /// # Ok::<(), ArrayError>(())
    /// ```
    pub fn copy_truncated(
        capacity: usize,
        elements_to_copy: usize,
        source: &Buffer<T>,
    ) -> Result<Self> {
        if capacity > 0 && elements_to_copy > source.size() {
            return Err(ArrayError::CopyExceedsSource {
                requested: elements_to_copy,
                available: source.size(),
            });
        }
        Ok(Self::copy_clamped(capacity, elements_to_copy, source))
    }

    /// Infallible truncating copy used by the growth paths: copies
    /// `min(capacity, elements_to_copy, source.size())` elements.
    pub(crate) fn copy_clamped(
        capacity: usize,
        elements_to_copy: usize,
        source: &Buffer<T>,
    ) -> Self {
        let mut buffer = Self::new(capacity);
        let count = capacity.min(elements_to_copy).min(source.size());
        buffer.data[..count].clone_from_slice(&source.data[..count]);
        buffer
    }
}

impl<T> Default for Buffer<T> {
    /// An empty buffer; performs no allocation.
    fn default() -> Self {
        Self {
            data: Box::default(),
        }
    }
}

impl<T> std::ops::Index<usize> for Buffer<T> {
    type Output = T;

    /// Panics if `index >= size()`. For the assertion-free fast path see
    /// [`get_unchecked`](Buffer::get_unchecked).
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T> std::ops::IndexMut<usize> for Buffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T> std::fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer").field("size", &self.size()).finish()
    }
}

#[cfg(feature = "zeroize")]
impl<T: Zeroize> Zeroize for Buffer<T> {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}
