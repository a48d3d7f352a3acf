//! Logarithmic intensity remapping.
//!
//! Maps each 8-bit pixel `p` to `log_base(p + 1)`. The `+1` keeps black
//! pixels finite (`log(1) = 0`). Because the input only has 256 distinct
//! values, the curve is evaluated once into a [`LogLut`] and applied by
//! lookup.
//!
//! Illumination acts roughly multiplicatively on intensity, so in this
//! domain it becomes an additive term the DCT stage can separate.
//!
//! # Example
//!
//! ```rust
//! use dctnorm_core::Matrix;
//! use dctnorm_ops::log_op::LogLut;
//!
//! let lut = LogLut::<f32>::new(2.0).unwrap();
//! assert_eq!(lut.get(0), 0.0);
//! assert_eq!(lut.get(255), 8.0);
//!
//! let img = Matrix::filled(2, 2, 3u8);
//! let log_img = lut.apply(&img);
//! assert_eq!(log_img.get(1, 1), Some(2.0));
//! ```

use crate::parallel;
use dctnorm_core::{Error, GrayImage, Matrix, Result, Sample};

/// Number of distinct 8-bit input values.
pub const LUT_SIZE: usize = 256;

/// Precomputed `log_base(i + 1)` for every 8-bit value `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogLut<T> {
    base: f64,
    table: [T; LUT_SIZE],
}

impl<T: Sample> LogLut<T> {
    /// Builds the table for logarithm base `base`.
    ///
    /// Entries are evaluated in `f64` and then narrowed to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for `log_base` unless `base` is
    /// finite and greater than 1. For `base <= 1` the logarithm is undefined
    /// (base 1) or inverts the intensity order.
    pub fn new(base: f64) -> Result<Self> {
        validate_base(base)?;
        let ln_base = base.ln();
        let mut table = [T::zero(); LUT_SIZE];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = T::from_f64_lossy(((i + 1) as f64).ln() / ln_base);
        }
        Ok(Self { base, table })
    }

    /// Logarithm base the table was built for.
    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Mapped value for pixel `p`.
    #[inline]
    pub fn get(&self, p: u8) -> T {
        self.table[p as usize]
    }

    /// The full 256-entry table.
    #[inline]
    pub fn table(&self) -> &[T; LUT_SIZE] {
        &self.table
    }

    /// Maps `image` into the log domain.
    ///
    /// The result is a new matrix of the same shape; `image` is untouched.
    pub fn apply(&self, image: &GrayImage) -> Matrix<T> {
        let table = &self.table;
        parallel::map_matrix(image, |p| table[p as usize])
    }
}

/// Checks that `base` is a usable logarithm base.
pub fn validate_base(base: f64) -> Result<()> {
    if !base.is_finite() || base <= 1.0 {
        return Err(Error::invalid_parameter(
            "log_base",
            format!("{base} must be a finite number greater than 1"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_base2_powers() {
        let lut = LogLut::<f64>::new(2.0).unwrap();
        assert_eq!(lut.get(0), 0.0);
        assert_relative_eq!(lut.get(1), 1.0, max_relative = 1e-12);
        assert_relative_eq!(lut.get(3), 2.0, max_relative = 1e-12);
        assert_relative_eq!(lut.get(255), 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_base10() {
        let lut = LogLut::<f32>::new(10.0).unwrap();
        assert_relative_eq!(lut.get(9), 1.0, max_relative = 1e-6);
        assert_relative_eq!(lut.get(99), 2.0, max_relative = 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let lut = LogLut::<f32>::new(1.5).unwrap();
        for w in lut.table().windows(2) {
            assert!(w[1] > w[0]);
        }
    }

    #[test]
    fn test_invalid_base() {
        for base in [1.0, 0.5, 0.0, -2.0, f64::NAN, f64::INFINITY] {
            let err = LogLut::<f32>::new(base).unwrap_err();
            assert_eq!(err.parameter(), Some("log_base"), "base {base}");
        }
    }

    #[test]
    fn test_apply_preserves_shape() {
        let img = Matrix::from_fn(3, 7, |r, c| (r * 7 + c) as u8);
        let lut = LogLut::<f64>::new(std::f64::consts::E).unwrap();
        let out = lut.apply(&img);
        assert_eq!(out.shape(), (3, 7));
        assert_relative_eq!(out.get(2, 6).unwrap(), 21.0f64.ln(), max_relative = 1e-12);
        // input is left as-is
        assert_eq!(img.get(2, 6), Some(20));
    }
}
