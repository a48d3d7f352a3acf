//! The illumination normalization pipeline.
//!
//! ```text
//! GrayImage ─► LogLut ─► Dct2d::forward ─► suppress ─► Dct2d::inverse
//!   (u8)        (T)         (T, coeffs)      (in place)       (T)
//!
//!           ─► normalize_range ─► encode
//!                  [0, 1]          out
//! ```
//!
//! Every stage allocates its own output; nothing is cached between calls.
//! Parameters are validated before any transform runs.

use crate::config::NormalizeOptions;
use crate::dct::{Dct2d, DctSample};
use crate::log_op::LogLut;
use crate::range::{degenerate_tolerance, encode, normalize_range};
use crate::suppress::suppress_low_frequencies;
use dctnorm_core::{GrayImage, Matrix, Normalized, Precision, Result};
use tracing::{debug, trace};

/// Normalizes the illumination of a grayscale image.
///
/// Returns an image of the same shape in `options.output` encoding:
/// integers in [0, 255] or floats in [0, 1]. A uniform input (or any input
/// whose reconstruction has no dynamic range) yields all zeros.
///
/// # Errors
///
/// [`dctnorm_core::Error::InvalidParameter`] for a negative `dct_distance`
/// or a `log_base` that is not finite and greater than 1. Empty images
/// cannot reach this function: [`Matrix`] rejects zero dimensions at
/// construction.
///
/// # Example
///
/// ```rust
/// use dctnorm_core::Matrix;
/// use dctnorm_ops::{normalize_illumination, NormalizeOptions};
///
/// // Left-to-right illumination gradient over a checkerboard.
/// let img = Matrix::from_fn(32, 32, |r, c| {
///     let light = 40 + c * 5;
///     let detail = if (r / 4 + c / 4) % 2 == 0 { 20 } else { 0 };
///     (light + detail) as u8
/// });
///
/// let out = normalize_illumination(&img, &NormalizeOptions::default()).unwrap();
/// assert_eq!(out.shape(), (32, 32));
/// ```
pub fn normalize_illumination(image: &GrayImage, options: &NormalizeOptions) -> Result<Normalized> {
    options.validate()?;
    debug!(
        rows = image.rows(),
        cols = image.cols(),
        dct_distance = options.dct_distance,
        output = %options.output,
        precision = %options.precision,
        log_base = options.log_base,
        "normalizing illumination"
    );

    let out = match options.precision {
        Precision::Float32 => encode(&run_pipeline::<f32>(image, options)?, options.output),
        Precision::Float64 => encode(&run_pipeline::<f64>(image, options)?, options.output),
    };
    Ok(out)
}

/// [`normalize_illumination`] with [`NormalizeOptions::default`].
pub fn normalize_illumination_default(image: &GrayImage) -> Result<Normalized> {
    normalize_illumination(image, &NormalizeOptions::default())
}

/// Runs every stage except the final encoding, at precision `T`.
///
/// The result is in [0, 1]. `options.precision` and `options.output` are
/// ignored; `T` selects the precision.
///
/// # Errors
///
/// Same as [`normalize_illumination`].
pub fn run_pipeline<T: DctSample>(
    image: &GrayImage,
    options: &NormalizeOptions,
) -> Result<Matrix<T>> {
    let distance = options.distance()?;
    let lut = LogLut::<T>::new(options.log_base)?;
    let (rows, cols) = image.shape();
    let plan = Dct2d::<T>::new(rows, cols)?;

    let log_img = lut.apply(image);
    // log(p + 1) >= 0, so the peak magnitude is the maximum
    let (_, peak) = log_img.min_max();

    let mut coeffs = plan.forward(&log_img)?;
    let zeroed = suppress_low_frequencies(&mut coeffs, distance);
    trace!(distance, zeroed, "suppressed low-frequency coefficients");

    let mut recon = plan.inverse(&coeffs)?;
    let stats = normalize_range(&mut recon, degenerate_tolerance(peak));
    if stats.degenerate {
        debug!(rows, cols, "image has no dynamic range after suppression");
    }

    Ok(recon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dctnorm_core::OutputEncoding;

    #[test]
    fn test_validation_runs_first() {
        let img = Matrix::filled(4, 4, 10u8);
        let opts = NormalizeOptions::default().with_dct_distance(-5);
        let err = normalize_illumination(&img, &opts).unwrap_err();
        assert_eq!(err.parameter(), Some("dct_distance"));

        let opts = NormalizeOptions::default().with_log_base(1.0);
        let err = normalize_illumination(&img, &opts).unwrap_err();
        assert_eq!(err.parameter(), Some("log_base"));
    }

    #[test]
    fn test_output_variant_matches_request() {
        let img = Matrix::from_fn(8, 8, |r, c| (r * 30 + c * 3) as u8);
        for enc in [OutputEncoding::UInt8, OutputEncoding::Float32, OutputEncoding::Float64] {
            let opts = NormalizeOptions::default().with_output(enc).with_dct_distance(3);
            let out = normalize_illumination(&img, &opts).unwrap();
            assert_eq!(out.encoding(), enc);
            assert_eq!(out.shape(), (8, 8));
        }
    }

    #[test]
    fn test_run_pipeline_unit_range() {
        let img = Matrix::from_fn(10, 6, |r, c| ((r * 7 + c * 13) % 256) as u8);
        let opts = NormalizeOptions::default().with_dct_distance(4);
        let out = run_pipeline::<f64>(&img, &opts).unwrap();
        let (lo, hi) = out.min_max();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 1.0);
    }

    #[test]
    fn test_all_black_is_zero() {
        let img = Matrix::filled(5, 5, 0u8);
        let out = normalize_illumination(&img, &NormalizeOptions::default()).unwrap();
        assert!(out.as_u8().unwrap().data().iter().all(|&v| v == 0));
    }
}
