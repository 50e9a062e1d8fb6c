//! Error types for tensormath

use thiserror::Error;

/// Result type alias using tensormath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensormath operations
///
/// Only conditions a caller can reasonably hit with runtime data are
/// reported here. Mismatched buffer lengths handed to a hot kernel and
/// out-of-range select indices indicate programmer error and panic
/// instead of returning a variant.
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Slice length mismatch between operands
    #[error("Length mismatch: {lhs} vs {rhs} elements")]
    LengthMismatch {
        /// Left-hand side length
        lhs: usize,
        /// Right-hand side length
        rhs: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
