//! Error types for dctnorm operations.
//!
//! Every failure in the normalization pipeline is a deterministic validation
//! failure: a bad parameter, or an input matrix that cannot be processed.
//! There is no transient error class, so nothing here is retryable.
//!
//! # Usage
//!
//! ```rust
//! use dctnorm_core::{Error, Result};
//!
//! fn check_base(base: f64) -> Result<()> {
//!     if !(base > 1.0) {
//!         return Err(Error::invalid_parameter("log_base", format!("{base} must be > 1")));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_base(0.5).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during illumination normalization.
///
/// # Categories
///
/// - **Parameter errors**: [`InvalidParameter`](Error::InvalidParameter)
/// - **Input errors**: [`InvalidInput`](Error::InvalidInput),
///   [`DimensionMismatch`](Error::DimensionMismatch)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A named parameter has an unusable value.
    ///
    /// Raised for a logarithm base that is not greater than one, a negative
    /// DCT distance, or an unrecognized encoding/precision name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dctnorm_core::Error;
    ///
    /// let err = Error::invalid_parameter("log_base", "1 must be > 1");
    /// assert!(err.to_string().contains("log_base"));
    /// ```
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name as seen by the caller
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// The input matrix cannot be processed.
    ///
    /// Returned for empty matrices and for buffers whose length does not
    /// match the declared shape.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A matrix does not have the shape an operation was planned for.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, got.0, got.1)]
    DimensionMismatch {
        /// Planned shape as (rows, cols)
        expected: (usize, usize),
        /// Shape of the matrix that was passed
        got: (usize, usize),
    },
}

impl Error {
    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::InvalidInput`] error.
    #[inline]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(expected: (usize, usize), got: (usize, usize)) -> Self {
        Self::DimensionMismatch { expected, got }
    }

    /// Returns `true` if this error names a rejected parameter.
    #[inline]
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns the offending parameter name, if any.
    #[inline]
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter() {
        let err = Error::invalid_parameter("dct_distance", "-3 is negative");
        let msg = err.to_string();
        assert!(msg.contains("dct_distance"));
        assert!(msg.contains("-3"));
        assert!(err.is_parameter_error());
        assert_eq!(err.parameter(), Some("dct_distance"));
    }

    #[test]
    fn test_invalid_input() {
        let err = Error::invalid_input("matrix is empty");
        assert!(err.to_string().contains("empty"));
        assert!(!err.is_parameter_error());
        assert_eq!(err.parameter(), None);
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Error::dimension_mismatch((8, 8), (4, 16));
        let msg = err.to_string();
        assert!(msg.contains("8x8"));
        assert!(msg.contains("4x16"));
    }
}
