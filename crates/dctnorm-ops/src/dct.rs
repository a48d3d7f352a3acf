//! Two-dimensional Discrete Cosine Transform.
//!
//! Separable orthonormal DCT-II (forward) and DCT-III (inverse) built from
//! `rustdct` 1D plans: rows are transformed first, then columns via a
//! transpose.
//!
//! # Normalization
//!
//! `rustdct` transforms are unnormalized. Coefficient `k` of a length-`n`
//! forward transform is scaled by `sqrt(1/n)` for `k = 0` and `sqrt(2/n)`
//! otherwise, so the 2D transform is orthonormal: the DC term equals
//! `sum / sqrt(M*N)` and energy is preserved. The inverse undoes exactly
//! this scaling, so `inverse(forward(x)) == x` up to rounding.
//!
//! # Example
//!
//! ```rust
//! use dctnorm_core::Matrix;
//! use dctnorm_ops::dct::Dct2d;
//!
//! let x = Matrix::from_fn(8, 6, |r, c| (r * 6 + c) as f64);
//! let plan = Dct2d::<f64>::new(8, 6).unwrap();
//!
//! let coeffs = plan.forward(&x).unwrap();
//! let back = plan.inverse(&coeffs).unwrap();
//!
//! for (a, b) in x.data().iter().zip(back.data()) {
//!     assert!((a - b).abs() < 1e-9);
//! }
//! ```

use crate::parallel;
use dctnorm_core::{Error, Matrix, Result, Sample};
use rustdct::{DctNum, DctPlanner, TransformType2And3};
use std::sync::Arc;
use tracing::trace;

/// Float types the DCT stage can process.
pub trait DctSample: Sample + DctNum {}

impl<T: Sample + DctNum> DctSample for T {}

/// Planned 2D DCT for a fixed `rows x cols` shape.
///
/// Planning is the expensive part; a plan can transform any number of
/// matrices of its shape.
pub struct Dct2d<T: DctNum> {
    rows: usize,
    cols: usize,
    /// Length `cols`, applied along each row.
    row_dct: Arc<dyn TransformType2And3<T>>,
    /// Length `rows`, applied along each column.
    col_dct: Arc<dyn TransformType2And3<T>>,
}

impl<T: DctSample> Dct2d<T> {
    /// Plans transforms for `rows x cols` matrices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::invalid_input(format!(
                "cannot plan a DCT for an empty {rows}x{cols} matrix"
            )));
        }
        let mut planner = DctPlanner::new();
        let row_dct = planner.plan_dct2(cols);
        let col_dct = planner.plan_dct2(rows);
        trace!(rows, cols, "planned 2D DCT");
        Ok(Self {
            rows,
            cols,
            row_dct,
            col_dct,
        })
    }

    /// Planned shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Forward orthonormal 2D DCT-II.
    ///
    /// Returns a new coefficient matrix; `input` is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `input` is not the planned shape.
    pub fn forward(&self, input: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_shape(input)?;

        let mut out = input.clone();
        forward_rows(out.data_mut(), &self.row_dct, self.cols);

        let mut cols_major = out.transpose();
        forward_rows(cols_major.data_mut(), &self.col_dct, self.rows);

        Ok(cols_major.transpose())
    }

    /// Inverse orthonormal 2D DCT (DCT-III).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `coeffs` is not the planned shape.
    pub fn inverse(&self, coeffs: &Matrix<T>) -> Result<Matrix<T>> {
        self.check_shape(coeffs)?;

        let mut cols_major = coeffs.transpose();
        inverse_rows(cols_major.data_mut(), &self.col_dct, self.rows);

        let mut out = cols_major.transpose();
        inverse_rows(out.data_mut(), &self.row_dct, self.cols);

        Ok(out)
    }

    fn check_shape(&self, m: &Matrix<T>) -> Result<()> {
        if m.shape() != (self.rows, self.cols) {
            return Err(Error::dimension_mismatch((self.rows, self.cols), m.shape()));
        }
        Ok(())
    }
}

impl<T: DctNum> std::fmt::Debug for Dct2d<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dct2d")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// One-shot forward orthonormal 2D DCT.
pub fn dct2d<T: DctSample>(input: &Matrix<T>) -> Result<Matrix<T>> {
    Dct2d::new(input.rows(), input.cols())?.forward(input)
}

/// One-shot inverse orthonormal 2D DCT.
pub fn idct2d<T: DctSample>(coeffs: &Matrix<T>) -> Result<Matrix<T>> {
    Dct2d::new(coeffs.rows(), coeffs.cols())?.inverse(coeffs)
}

/// `(sqrt(1/n), sqrt(2/n))`: orthonormal weights of the DC and AC terms.
fn ortho_weights<T: Sample>(n: usize) -> (T, T) {
    let n = n as f64;
    (
        T::from_f64_lossy((1.0 / n).sqrt()),
        T::from_f64_lossy((2.0 / n).sqrt()),
    )
}

fn forward_rows<T: DctSample>(data: &mut [T], plan: &Arc<dyn TransformType2And3<T>>, len: usize) {
    let (dc, ac) = ortho_weights::<T>(len);
    parallel::for_each_row(data, len, |row| {
        plan.process_dct2(row);
        row[0] = row[0] * dc;
        for v in &mut row[1..] {
            *v = *v * ac;
        }
    });
}

fn inverse_rows<T: DctSample>(data: &mut [T], plan: &Arc<dyn TransformType2And3<T>>, len: usize) {
    let (dc, ac) = ortho_weights::<T>(len);
    // DCT-III halves its first input
    let dc = dc + dc;
    parallel::for_each_row(data, len, |row| {
        row[0] = row[0] * dc;
        for v in &mut row[1..] {
            *v = *v * ac;
        }
        plan.process_dct3(row);
    });
}
