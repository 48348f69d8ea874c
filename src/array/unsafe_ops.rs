// src/array/unsafe_ops.rs
//! Unchecked (unsafe) element access for maximum performance

use crate::DynArray;

impl<T> DynArray<T> {
    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(
            index < self.len(),
            "get_unchecked: index {} >= len {}",
            index,
            self.len()
        );

        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// Caller MUST guarantee: `index < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.len(),
            "get_unchecked_mut: index {} >= len {}",
            index,
            self.len()
        );

        unsafe { self.buffer.get_unchecked_mut(index) }
    }
}
