// src/array/core.rs
//! Core dynamic array structure: construction, deep copy and element access
//!
//! The array owns exactly one [`Buffer`] plus a `used` counter. It never
//! touches raw memory directly; all allocation, element copying and release
//! is delegated to the buffer layer.

use crate::buffer::Buffer;
use crate::error::{ArrayError, Result};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A growable contiguous sequence with amortized-constant append.
///
/// Elements at indices `[0, len())` are the logical contents; slots at
/// `[len(), capacity())` are allocated but carry no meaning (they hold
/// default-initialized or leftover values). The invariant `len() <=
/// capacity()` holds at all times.
///
/// Every capacity change builds a replacement buffer copy-truncated from the
/// current one and swaps it in, so a failed reallocation can never corrupt
/// the existing contents.
///
/// Not safe for concurrent mutation; callers needing shared access must
/// synchronize externally.
///
/// # Examples
///
/// ```
/// use dynarr::DynArray;
/// # use dynarr::ArrayError;
///
/// let mut arr = DynArray::new();
/// arr.push_back(1);
/// arr.push_back(2);
/// arr.push_back(3);
///
/// assert_eq!(arr.len(), 3);
/// assert_eq!(*arr.at(1)?, 2);
/// assert_eq!(*arr.back()?, 3);
/// # Ok::<(), ArrayError>(())
/// ```
pub struct DynArray<T> {
    pub(crate) buffer: Buffer<T>,
    pub(crate) used: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array with no allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let arr: DynArray<u32> = DynArray::new();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            buffer: Buffer::default(),
            used: 0,
        }
    }

    /// Returns the number of logically live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.used
    }

    /// Returns the capacity of the underlying buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buffer.size()
    }

    /// Returns `true` if the array holds no logical elements.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Returns a reference to the element at `index` with bounds checking.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push_back(7);
    ///
    /// assert_eq!(arr.at(0).copied(), Ok(7));
    /// assert!(arr.at(1).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        if index < self.used {
            Ok(&self.buffer[index])
        } else {
            Err(ArrayError::IndexOutOfRange {
                index,
                len: self.used,
            })
        }
    }

    /// Returns a mutable reference to the element at `index` with bounds
    /// checking.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index < self.used {
            Ok(&mut self.buffer[index])
        } else {
            Err(ArrayError::IndexOutOfRange {
                index,
                len: self.used,
            })
        }
    }

    /// Returns a reference to the first logical element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Empty`] if the array is empty.
    #[inline]
    pub fn front(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ArrayError::Empty);
        }
        Ok(&self.buffer[0])
    }

    /// Returns a mutable reference to the first logical element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Empty`] if the array is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ArrayError::Empty);
        }
        Ok(&mut self.buffer[0])
    }

    /// Returns a reference to the last logical element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Empty`] if the array is empty.
    #[inline]
    pub fn back(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(ArrayError::Empty);
        }
        Ok(&self.buffer[self.used - 1])
    }

    /// Returns a mutable reference to the last logical element.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::Empty`] if the array is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(ArrayError::Empty);
        }
        Ok(&mut self.buffer[self.used - 1])
    }

    /// Returns the logical contents as a slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push_back(1);
    /// arr.push_back(2);
    /// assert_eq!(arr.as_slice(), &[1, 2]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.used]
    }

    /// Returns the logical contents as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer.as_mut_slice()[..self.used]
    }
}

impl<T: Default> DynArray<T> {
    /// Creates an empty array backed by a buffer of `capacity` slots.
    ///
    /// The array's length is 0 regardless of `capacity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let arr: DynArray<u32> = DynArray::with_capacity(10);
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 10);
    /// assert!(arr.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Buffer::new(capacity),
            used: 0,
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Clone> Clone for DynArray<T> {
    /// Deep copy: duplicates the source's full capacity and its `used` count
    /// via a freshly built buffer. Mutating either array afterwards never
    /// affects the other.
    fn clone(&self) -> Self {
        Self {
            buffer: Buffer::copy_clamped(self.buffer.size(), self.used, &self.buffer),
            used: self.used,
        }
    }

    /// Copy-assignment: builds the replacement buffer first, then swaps it
    /// in, so a failed build leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = Buffer::copy_clamped(source.buffer.size(), source.used, &source.buffer);
        self.buffer.swap(&mut replacement);
        self.used = source.used;
    }
}

impl<T> std::ops::Index<usize> for DynArray<T> {
    type Output = T;

    /// Panics if `index >= len()`. For the assertion-free fast path see
    /// [`get_unchecked`](DynArray::get_unchecked), for a recoverable check
    /// see [`at`](DynArray::at).
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> std::ops::IndexMut<usize> for DynArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

#[cfg(feature = "zeroize")]
impl<T: Zeroize> Zeroize for DynArray<T> {
    /// Wipes the whole allocation, including leftover slots past `len()`,
    /// and resets the length to 0. The capacity is kept.
    fn zeroize(&mut self) {
        self.buffer.zeroize();
        self.used = 0;
    }
}
