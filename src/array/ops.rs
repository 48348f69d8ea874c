// src/array/ops.rs
//! Mutating operations: append, remove and the capacity policy
//!
//! All capacity changes follow the same shape: build a replacement buffer
//! copy-truncated from the current one, then swap it into place. The old
//! allocation drops with the temporary, and a build that fails leaves the
//! array exactly as it was.

use crate::buffer::Buffer;
use crate::DynArray;

impl<T: Default + Clone> DynArray<T> {
    /// Grows for one more appended element: capacity 0 becomes 4, anything
    /// else doubles.
    fn grow_for_push(&mut self) {
        if self.buffer.size() == 0 {
            let mut replacement = Buffer::new(4);
            self.buffer.swap(&mut replacement);
            return;
        }

        let mut replacement = Buffer::copy_clamped(self.buffer.size() * 2, self.used, &self.buffer);
        self.buffer.swap(&mut replacement);
    }

    /// Retargets the capacity for an explicit `resize`/`reserve` request:
    /// - equal to the current capacity: no change
    /// - between the capacity and its double: never grow by less than
    ///   doubling, so the capacity doubles
    /// - at least double: exactly the requested value
    /// - below the capacity: exactly the requested value, truncating `used`
    fn retarget(&mut self, requested: usize) {
        let current = self.buffer.size();
        if requested == current {
            return;
        }

        let new_capacity = if requested > current && requested < current * 2 {
            current * 2
        } else {
            requested
        };

        self.used = self.used.min(new_capacity);

        let mut replacement = Buffer::copy_clamped(new_capacity, self.used, &self.buffer);
        self.buffer.swap(&mut replacement);
    }

    /// Appends an element, growing the capacity if the array is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push_back(1);
    /// assert_eq!(arr.len(), 1);
    /// assert_eq!(arr.capacity(), 4);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.used == self.buffer.size() {
            self.grow_for_push();
        }

        self.buffer[self.used] = value;
        self.used += 1;
    }

    /// Removes the last logical element; a no-op on an empty array.
    ///
    /// The slot keeps its value until it is overwritten or the buffer is
    /// replaced. The capacity never changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push_back(1);
    /// arr.pop_back();
    /// arr.pop_back(); // no-op
    /// assert!(arr.is_empty());
    /// ```
    pub fn pop_back(&mut self) {
        if self.used > 0 {
            self.used -= 1;
        }
    }

    /// Adjusts the capacity per the retarget policy, then fills with clones
    /// of `value` until `len() == new_len`.
    ///
    /// Elements below `min(old len, new_len)` are preserved. After a growing
    /// resize `len()` equals `new_len` even when the policy over-allocated
    /// the capacity; after a shrinking resize both `len()` and `capacity()`
    /// equal `new_len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let mut arr: DynArray<i32> = DynArray::with_capacity(10);
    /// arr.resize(15, 9);
    /// assert_eq!(arr.capacity(), 20); // 15 is less than double, so doubled
    /// assert_eq!(arr.len(), 15);
    /// assert_eq!(arr[14], 9);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        self.retarget(new_len);

        while self.used < new_len {
            self.push_back(value.clone());
        }
    }

    /// Adjusts the capacity to the absolute target `new_capacity` per the
    /// retarget policy without appending elements.
    ///
    /// Note this takes an absolute capacity, not an additional count the way
    /// [`Vec::reserve`] does. Shrinking below the current length truncates
    /// the trailing elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let mut arr: DynArray<i32> = DynArray::with_capacity(10);
    /// arr.reserve(15);
    /// assert_eq!(arr.capacity(), 20);
    /// assert_eq!(arr.len(), 0);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        self.retarget(new_capacity);
    }
}

impl<T> DynArray<T> {
    /// Releases the underlying allocation entirely and resets the length.
    ///
    /// This is a full release: the capacity drops to 0, not merely the
    /// logical length.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynarr::DynArray;
    ///
    /// let mut arr = DynArray::new();
    /// arr.push_back(1);
    /// arr.clear();
    /// assert_eq!(arr.len(), 0);
    /// assert_eq!(arr.capacity(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.used = 0;
    }
}
