// src/error.rs
//! Error types for container operations with conversion support

use std::fmt;

/// Errors that can occur during buffer and array operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// A copying constructor asked for more elements than the source buffer holds
    CopyExceedsSource {
        /// Number of elements the caller asked to copy
        requested: usize,
        /// Capacity of the source buffer
        available: usize,
    },
    /// Checked access past the logical length
    IndexOutOfRange {
        /// Index the caller asked for
        index: usize,
        /// Logical length at the time of the call
        len: usize,
    },
    /// `front`/`back` on an empty array
    Empty,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CopyExceedsSource {
                requested,
                available,
            } => write!(
                f,
                "copy of {} elements exceeds source capacity {}",
                requested, available
            ),
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            Self::Empty => write!(f, "the array is empty"),
        }
    }
}

impl std::error::Error for ArrayError {}

// ============================================================================
// ERROR CONVERSION - Makes the container compatible with common error types
// ============================================================================

/// Convert ArrayError to std::io::Error
impl From<ArrayError> for std::io::Error {
    fn from(err: ArrayError) -> Self {
        use std::io::ErrorKind;
        match err {
            ArrayError::Empty => std::io::Error::new(ErrorKind::UnexpectedEof, err),
            _ => std::io::Error::new(ErrorKind::InvalidInput, err),
        }
    }
}

/// Convert ArrayError to anyhow::Error
#[cfg(feature = "anyhow")]
impl From<ArrayError> for anyhow::Error {
    fn from(err: ArrayError) -> Self {
        anyhow::anyhow!("{}", err)
    }
}

// ============================================================================
// RESULT TYPE ALIASES
// ============================================================================

/// Result type alias for container operations
///
/// Note: When using with other Result types (like anyhow::Result),
/// either qualify the type (`dynarr::Result<T>`) or use the conversion traits.
pub type Result<T> = std::result::Result<T, ArrayError>;

// ============================================================================
// EXTENSION TRAIT FOR EASY CONVERSION
// ============================================================================

/// Extension trait for converting Results between different error types
pub trait ResultExt<T> {
    /// Convert to anyhow::Result
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T>;

    /// Convert to io::Result
    fn into_io(self) -> std::io::Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    #[cfg(feature = "anyhow")]
    fn into_anyhow(self) -> anyhow::Result<T> {
        self.map_err(|e| e.into())
    }

    fn into_io(self) -> std::io::Result<T> {
        self.map_err(|e| e.into())
    }
}
