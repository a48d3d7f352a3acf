//! # dctnorm-core
//!
//! Core types for illumination normalization in the logarithm DCT domain.
//!
//! This crate provides the foundational types shared by the dctnorm crates:
//!
//! - [`Matrix`], [`GrayImage`] - Row-major 2D buffers
//! - [`Normalized`] - Pipeline output in the requested encoding
//! - [`OutputEncoding`], [`Precision`] - Output and compute element types
//! - [`Sample`] - Float trait implemented for `f32` and `f64`
//! - [`Error`], [`Result`] - Validation errors
//!
//! ## Crate Structure
//!
//! ```text
//! dctnorm-core (this crate)
//!    ^
//!    |
//!    +-- dctnorm-ops (log LUT, DCT, suppression, normalization pipeline)
//!    +-- dctnorm-bench (criterion benchmarks)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialization for [`OutputEncoding`] and [`Precision`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod format;
pub mod matrix;
pub mod sample;

// Re-exports for convenience
pub use error::{Error, Result};
pub use format::{OutputEncoding, Precision};
pub use matrix::{GrayImage, Matrix, Normalized};
pub use sample::Sample;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use dctnorm_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::format::{OutputEncoding, Precision};
    pub use crate::matrix::{GrayImage, Matrix, Normalized};
    pub use crate::sample::Sample;
}
