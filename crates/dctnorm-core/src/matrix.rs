//! Dense 2D matrix buffers.
//!
//! This module provides the containers threaded through the pipeline:
//! - [`Matrix`] - Owned row-major M×N buffer of any element type
//! - [`GrayImage`] - `Matrix<u8>`, the single-channel 8-bit input
//! - [`Normalized`] - Pipeline output in one of the [`OutputEncoding`]s
//!
//! # Memory Layout
//!
//! Elements are stored **row-major**, top-to-bottom:
//!
//! ```text
//! Memory: [a00 a01 a02 ...]  ← Row 0
//!         [a10 a11 a12 ...]  ← Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use dctnorm_core::{GrayImage, Matrix};
//!
//! let mut img: GrayImage = Matrix::filled(4, 6, 100);
//! img.set(1, 2, 255);
//! assert_eq!(img.shape(), (4, 6));
//! assert_eq!(img.get(1, 2), Some(255));
//! assert_eq!(img.get(4, 0), None);
//! ```
//!
//! Matrices are never empty: every constructor rejects a zero dimension.

use crate::format::OutputEncoding;
use crate::{Error, Result};

/// Owned row-major matrix.
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Single-channel 8-bit grayscale image.
pub type GrayImage = Matrix<u8>;

fn check_shape(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(Error::invalid_input(format!(
            "matrix is empty ({rows}x{cols})"
        )));
    }
    rows.checked_mul(cols)
        .ok_or_else(|| Error::invalid_input(format!("matrix size {rows}x{cols} overflows")))
}

impl<T: Copy + Default> Matrix<T> {
    /// Creates a matrix filled with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = check_shape(rows, cols)?;
        Ok(Self {
            data: vec![T::default(); len],
            rows,
            cols,
        })
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the shape is empty or `data` does
    /// not hold exactly `rows * cols` elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dctnorm_core::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 3, vec![1u8, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(m.row(1), &[4, 5, 6]);
    ///
    /// assert!(Matrix::from_vec(2, 3, vec![1u8; 5]).is_err());
    /// ```
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        let expected = check_shape(rows, cols)?;
        if data.len() != expected {
            return Err(Error::invalid_input(format!(
                "expected {expected} elements for {rows}x{cols}, got {}",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix with every element set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix by evaluating `f(row, col)` for every position.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { data, rows, cols }
    }

    /// Number of rows (M).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (N).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total element count.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable raw row-major data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix, returning its row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        let start = r * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Row `r` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    #[inline]
    pub fn row_mut(&mut self, r: usize) -> &mut [T] {
        let start = r * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Element at `(r, c)`, or `None` outside the matrix.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> Option<T> {
        if r < self.rows && c < self.cols {
            Some(self.data[r * self.cols + c])
        } else {
            None
        }
    }

    /// Sets the element at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `(r, c)` is outside the matrix.
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: T) {
        assert!(
            r < self.rows && c < self.cols,
            "({r}, {c}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        self.data[r * self.cols + c] = value;
    }

    /// Applies `f` element-wise into a new matrix of the same shape.
    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        U: Copy,
        F: FnMut(T) -> U,
    {
        Matrix {
            data: self.data.iter().copied().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Returns the N×M transpose.
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                data.push(self.data[r * self.cols + c]);
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl<T: Copy + PartialOrd> Matrix<T> {
    /// Smallest and largest element.
    ///
    /// NaN elements never win a comparison and are skipped unless every
    /// element is NaN.
    pub fn min_max(&self) -> (T, T) {
        let is_nan = |v: &T| v.partial_cmp(v).is_none();
        let first = self
            .data
            .iter()
            .find(|v| !is_nan(v))
            .copied()
            .unwrap_or(self.data[0]);
        self.data.iter().filter(|v| !is_nan(v)).fold((first, first), |(lo, hi), &v| {
            (if v < lo { v } else { lo }, if v > hi { v } else { hi })
        })
    }
}

impl<T: Copy> std::fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

/// Normalized pipeline output.
///
/// The variant always matches the requested [`OutputEncoding`].
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// Integers in [0, 255].
    U8(Matrix<u8>),
    /// Floats in [0, 1].
    F32(Matrix<f32>),
    /// Floats in [0, 1].
    F64(Matrix<f64>),
}

impl Normalized {
    /// Encoding of this result.
    pub fn encoding(&self) -> OutputEncoding {
        match self {
            Self::U8(_) => OutputEncoding::UInt8,
            Self::F32(_) => OutputEncoding::Float32,
            Self::F64(_) => OutputEncoding::Float64,
        }
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::U8(m) => m.shape(),
            Self::F32(m) => m.shape(),
            Self::F64(m) => m.shape(),
        }
    }

    /// Element at `(r, c)` widened to `f64`, in the encoding's own range.
    pub fn get_f64(&self, r: usize, c: usize) -> Option<f64> {
        match self {
            Self::U8(m) => m.get(r, c).map(f64::from),
            Self::F32(m) => m.get(r, c).map(f64::from),
            Self::F64(m) => m.get(r, c),
        }
    }

    /// The 8-bit matrix, if this is [`Normalized::U8`].
    pub fn as_u8(&self) -> Option<&Matrix<u8>> {
        match self {
            Self::U8(m) => Some(m),
            _ => None,
        }
    }

    /// The f32 matrix, if this is [`Normalized::F32`].
    pub fn as_f32(&self) -> Option<&Matrix<f32>> {
        match self {
            Self::F32(m) => Some(m),
            _ => None,
        }
    }

    /// The f64 matrix, if this is [`Normalized::F64`].
    pub fn as_f64(&self) -> Option<&Matrix<f64>> {
        match self {
            Self::F64(m) => Some(m),
            _ => None,
        }
    }

    /// Consumes the result, returning the 8-bit matrix or the original value.
    pub fn into_u8(self) -> std::result::Result<Matrix<u8>, Self> {
        match self {
            Self::U8(m) => Ok(m),
            other => Err(other),
        }
    }
}
