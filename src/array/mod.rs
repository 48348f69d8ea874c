// src/array/mod.rs
//! Dynamic array layer: logical length and growth policy over a raw buffer

mod core;
mod ops;
mod unsafe_ops;

pub use self::core::DynArray;
