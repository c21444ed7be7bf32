//! Errors raised at the boundary of the transform engine.

use thiserror::Error;

/// Errors that may occur when a transform is called on a slice.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NttError {
    /// The slice does not hold exactly one polynomial.
    #[error("invalid polynomial length: expected {expected} coefficients, got {actual}")]
    InvalidLength {
        /// the ring degree
        expected: usize,
        /// length of the rejected slice
        actual: usize,
    },
}

/// Alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, NttError>;
