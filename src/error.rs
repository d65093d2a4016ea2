//! Error handling for the valbuf library
//!
//! Buffer misuse (out-of-range access, popping an empty buffer) is reported
//! as a structured error value. None of these conditions mutate the buffer,
//! and the library itself never prints: callers decide whether and where a
//! diagnostic is emitted.

use thiserror::Error;

/// Main error type for the valbuf library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufError {
    /// Index out of bounds access
    #[error("out of bounds: index {index}, len {len}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid length
        len: usize,
    },

    /// Removal from an empty buffer
    #[error("buffer is empty")]
    Empty,
}

impl BufError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// Create an empty-buffer error
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::Empty => "empty",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BufError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index >= len {
        Err(BufError::out_of_bounds(index, len))
    } else {
        Ok(())
    }
}
