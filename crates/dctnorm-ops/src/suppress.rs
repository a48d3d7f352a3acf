//! Low-frequency DCT coefficient suppression.
//!
//! Coefficients are grouped into anti-diagonal bands by `r + c`. Band 0 is
//! the DC term; low bands carry slow spatial variation (illumination),
//! high bands carry detail. Suppression at `distance` zeroes every
//! coefficient with `r + c < distance`:
//!
//! ```text
//! distance = 3 on a 4x5 matrix (x = zeroed)
//!
//!   x x x . .
//!   x x . . .
//!   x . . . .
//!   . . . . .
//! ```
//!
//! A distance of 0 or 1 leaves the matrix untouched.

use dctnorm_core::{Matrix, Sample};

/// Zeroes all coefficients with `r + c < distance`.
///
/// Returns the number of positions set to zero. The band is clipped to the
/// matrix, so any `distance` is accepted; a distance of at least
/// `rows + cols - 1` clears the whole matrix.
///
/// # Example
///
/// ```rust
/// use dctnorm_core::Matrix;
/// use dctnorm_ops::suppress::suppress_low_frequencies;
///
/// let mut coeffs = Matrix::filled(4, 5, 1.0f32);
/// assert_eq!(suppress_low_frequencies(&mut coeffs, 3), 6);
/// assert_eq!(coeffs.get(0, 2), Some(0.0));
/// assert_eq!(coeffs.get(1, 2), Some(1.0));
/// ```
pub fn suppress_low_frequencies<T: Sample>(coeffs: &mut Matrix<T>, distance: usize) -> usize {
    if distance <= 1 {
        return 0;
    }
    let (rows, cols) = coeffs.shape();
    let mut zeroed = 0;
    for r in 0..rows.min(distance) {
        let band = (distance - r).min(cols);
        coeffs.row_mut(r)[..band].fill(T::zero());
        zeroed += band;
    }
    zeroed
}

/// Number of positions [`suppress_low_frequencies`] zeroes for this shape.
pub fn suppressed_count(rows: usize, cols: usize, distance: usize) -> usize {
    if distance <= 1 {
        return 0;
    }
    (0..rows.min(distance))
        .map(|r| (distance - r).min(cols))
        .sum()
}

/// Whether position `(r, c)` is zeroed at `distance`.
#[inline]
pub fn is_suppressed(r: usize, c: usize, distance: usize) -> bool {
    distance > 1 && r + c < distance
}
