// src/buffer/unsafe_ops.rs
//! Unchecked (unsafe) buffer access for maximum performance

use super::core::Buffer;

impl<T> Buffer<T> {
    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.size()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size(),
            "get_unchecked: index {} >= size {}",
            index,
            self.size()
        );

        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.size()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size(),
            "get_unchecked_mut: index {} >= size {}",
            index,
            self.size()
        );

        unsafe { self.data.get_unchecked_mut(index) }
    }
}
