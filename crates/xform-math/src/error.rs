//! Error types for matrix operations.
//!
//! Almost everything in this crate is total: vector arithmetic, matrix
//! products, and the named builders cannot fail. The one reportable failure
//! is inverting a singular matrix, so the error enum is small.
//!
//! # Usage
//!
//! ```rust
//! use xform_math::{Mat4, MathError};
//!
//! let err = Mat4::ZERO.inverse().unwrap_err();
//! assert!(matches!(err, MathError::SingularMatrix { .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`MathError`] as the error type.
pub type MathResult<T> = std::result::Result<T, MathError>;

/// Errors that can occur during matrix operations.
///
/// Uses [`thiserror`] for the [`std::error::Error`] and
/// [`std::fmt::Display`] implementations.
#[derive(Debug, Error)]
pub enum MathError {
    /// The matrix has no inverse.
    ///
    /// Returned by [`Mat4::inverse`](crate::Mat4::inverse) when the absolute
    /// value of the determinant falls below `1e-6`. The threshold is
    /// absolute, not relative to the matrix's magnitude, so matrices with
    /// very large or very small entries can be misclassified near the
    /// boundary.
    #[error("singular matrix is not invertible (determinant {det})")]
    SingularMatrix {
        /// Determinant that failed the singularity check
        det: f32,
    },
}
