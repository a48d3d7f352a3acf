//! Shared fixtures for the dctnorm benchmarks.

use dctnorm_core::{GrayImage, Matrix};

/// Synthetic face-sized test image: 8px checkerboard detail under a
/// diagonal illumination ramp.
pub fn lit_pattern(rows: usize, cols: usize) -> GrayImage {
    let span = (rows + cols).saturating_sub(2).max(1) as f64;
    Matrix::from_fn(rows, cols, |r, c| {
        let reflectance = if (r / 8 + c / 8) % 2 == 0 { 200.0 } else { 120.0 };
        let light = 0.2 + 0.8 * (r + c) as f64 / span;
        (reflectance * light).round() as u8
    })
}
