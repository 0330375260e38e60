//! Error type for grid loading.

use std::error::Error;
use std::fmt;

/// Errors raised while installing block buffers into a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A supplied buffer's length does not match the length it must have:
    /// the declared volume for `load`, or the low buffer's length for the
    /// high buffer of a wide store.
    ///
    /// The operation that raised this left its previous state untouched, so
    /// the caller can retry or abort the world change.
    DimensionMismatch {
        /// The length the buffer was required to have.
        expected: usize,
        /// The length the buffer actually had.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DimensionMismatch { expected, actual } => write!(
                f,
                "block buffer length {actual} does not match required length {expected}"
            ),
        }
    }
}

impl Error for GridError {}
