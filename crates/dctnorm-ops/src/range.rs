//! Range normalization and output encoding.
//!
//! After the inverse DCT the image holds arbitrary reals. [`normalize_range`]
//! remaps them linearly onto [0, 1]:
//!
//! ```text
//! out = (v - min) / (max - min)
//! ```
//!
//! [`encode`] then converts to the requested [`OutputEncoding`].
//!
//! # Degenerate images
//!
//! When `max - min` is within `tolerance` the image has no usable dynamic
//! range (typically a uniform input, whose reconstruction is constant up to
//! rounding noise). Stretching that noise would produce garbage, and an exact
//! zero range would divide by zero, so the result is defined as all zeros.
//!
//! # Example
//!
//! ```rust
//! use dctnorm_core::{Matrix, OutputEncoding};
//! use dctnorm_ops::range::{encode, normalize_range};
//!
//! let mut m = Matrix::from_vec(1, 3, vec![-2.0f32, 0.0, 2.0]).unwrap();
//! let stats = normalize_range(&mut m, 0.0);
//! assert!(!stats.degenerate);
//! assert_eq!(m.data(), &[0.0, 0.5, 1.0]);
//!
//! let out = encode(&m, OutputEncoding::UInt8);
//! assert_eq!(out.as_u8().unwrap().data(), &[0, 128, 255]);
//! ```

use crate::parallel;
use dctnorm_core::{Matrix, Normalized, OutputEncoding, Sample};
use tracing::{debug, trace};

/// Multiple of machine epsilon (relative to the signal peak) below which a
/// reconstructed range counts as rounding noise.
pub const DEGENERATE_EPS_FACTOR: f64 = 1024.0;

/// Range of a matrix before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeStats<T> {
    /// Smallest value before rescaling.
    pub min: T,
    /// Largest value before rescaling.
    pub max: T,
    /// `true` if the range was too small to rescale and the output was zeroed.
    pub degenerate: bool,
}

/// Rescales `m` in place onto [0, 1].
///
/// If `max - min <= tolerance`, or the range is not finite, every element is
/// set to zero and the returned stats are marked degenerate.
pub fn normalize_range<T: Sample>(m: &mut Matrix<T>, tolerance: T) -> RangeStats<T> {
    let (min, max) = m.min_max();
    let span = max - min;

    if !span.is_finite() || span <= tolerance {
        debug!(
            min = min.into_f64(),
            max = max.into_f64(),
            tolerance = tolerance.into_f64(),
            "degenerate dynamic range, output set to zero"
        );
        m.data_mut().fill(T::zero());
        return RangeStats {
            min,
            max,
            degenerate: true,
        };
    }

    trace!(min = min.into_f64(), max = max.into_f64(), "normalizing range");
    parallel::update_in_place(m.data_mut(), |v| clamp_unit((v - min) / span));

    RangeStats {
        min,
        max,
        degenerate: false,
    }
}

/// Degenerate-range tolerance for a signal whose largest magnitude is `peak`.
///
/// `peak * EPS * DEGENERATE_EPS_FACTOR`: well above transform rounding noise,
/// far below any contrast an 8-bit input can produce.
pub fn degenerate_tolerance<T: Sample>(peak: T) -> T {
    peak.abs() * T::epsilon() * T::from_f64_lossy(DEGENERATE_EPS_FACTOR)
}

/// Converts a [0, 1] matrix to `encoding`.
///
/// `UInt8` scales by 255, rounds to nearest and clamps to [0, 255]. Float
/// encodings are a plain cast with no rescaling.
pub fn encode<T: Sample>(m: &Matrix<T>, encoding: OutputEncoding) -> Normalized {
    match encoding {
        OutputEncoding::UInt8 => {
            Normalized::U8(parallel::map_matrix(m, |v| quantize_u8(v.into_f64())))
        }
        OutputEncoding::Float32 => {
            Normalized::F32(parallel::map_matrix(m, |v| v.into_f64() as f32))
        }
        OutputEncoding::Float64 => Normalized::F64(parallel::map_matrix(m, |v| v.into_f64())),
    }
}

/// Maps a unit value to [0, 255], rounding to nearest.
///
/// NaN maps to 0.
#[inline]
pub fn quantize_u8(v: f64) -> u8 {
    let scaled = (v * 255.0).round();
    if scaled >= 255.0 {
        255
    } else if scaled > 0.0 {
        scaled as u8
    } else {
        0
    }
}

#[inline]
fn clamp_unit<T: Sample>(v: T) -> T {
    if v > T::one() {
        T::one()
    } else if v > T::zero() {
        v
    } else {
        T::zero()
    }
}
