// src/buffer/mod.rs
//! Raw buffer layer: exclusively-owned fixed-capacity allocations

mod core;
mod unsafe_ops;

pub use self::core::Buffer;
