//! # dctnorm-ops
//!
//! Illumination normalization of grayscale images in the logarithm domain of
//! the 2D Discrete Cosine Transform.
//!
//! Illumination changes are slow spatial variations that act multiplicatively
//! on intensity. In the log domain they become additive, and in the DCT
//! domain they concentrate in the low-frequency coefficients near DC.
//! Zeroing those coefficients and transforming back leaves the structural
//! detail with a flattened illumination field.
//!
//! # Modules
//!
//! - [`log_op`] - Log-domain mapping via a 256-entry lookup table
//! - [`dct`] - Orthonormal 2D DCT-II / DCT-III
//! - [`suppress`] - Anti-diagonal low-frequency coefficient zeroing
//! - [`range`] - Min/max normalization and output encoding
//! - [`pipeline`] - The full pipeline
//! - [`config`] - [`NormalizeOptions`]
//!
//! # Example
//!
//! ```rust
//! use dctnorm_core::{Matrix, OutputEncoding};
//! use dctnorm_ops::{normalize_illumination, NormalizeOptions};
//!
//! let img = Matrix::from_fn(16, 16, |r, c| (r * 8 + c * 4) as u8);
//!
//! let opts = NormalizeOptions::default()
//!     .with_dct_distance(5)
//!     .with_output(OutputEncoding::Float64);
//! let out = normalize_illumination(&img, &opts)?;
//!
//! let m = out.as_f64().unwrap();
//! assert!(m.data().iter().all(|&v| (0.0..=1.0).contains(&v)));
//! # Ok::<(), dctnorm_core::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Rayon for element-wise stages and row/column DCTs
//! - `serde` - Serialization for [`NormalizeOptions`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod dct;
pub mod log_op;
pub mod parallel;
pub mod pipeline;
pub mod range;
pub mod suppress;

pub use config::NormalizeOptions;
pub use dct::{Dct2d, DctSample};
pub use dctnorm_core::{Error, GrayImage, Matrix, Normalized, OutputEncoding, Precision, Result};
pub use log_op::LogLut;
pub use pipeline::{normalize_illumination, normalize_illumination_default, run_pipeline};
pub use range::RangeStats;
