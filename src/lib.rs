// src/lib.rs
//! # Two-Layer Growable Array
//!
//! A from-scratch growable contiguous-sequence container built in two layers:
//! a raw-allocation owner ([`Buffer`]) and a dynamic array ([`DynArray`])
//! that composes a buffer with a logical length.
//!
//! Features:
//! - Exclusive ownership of every allocation: buffers cannot be cloned, only
//!   deep-copied through the copying constructors or exchanged via `swap`
//! - Copy-and-swap reallocation: growth builds a replacement buffer and swaps
//!   it in, so a failed allocation never corrupts the original contents
//! - Doubling growth policy with a floor of 4 slots
//! - Checked (`at`, `front`, `back`) and unchecked (`get_unchecked`) access
//!   side by side
//! - Optional secure memory wiping via the `zeroize` feature
//! - Optional `anyhow` error interop
//!
//! Single-threaded by design: no internal locking, callers needing concurrent
//! access must synchronize externally.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod buffer;
pub mod error;

// Re-export main types
pub use array::DynArray;
pub use buffer::Buffer;
pub use error::{ArrayError, Result, ResultExt};

/// Commonly used imports.
pub mod prelude {
    pub use crate::array::DynArray;
    pub use crate::buffer::Buffer;
    pub use crate::error::{ArrayError, Result, ResultExt};
}
