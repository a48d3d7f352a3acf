//! Floating-point sample types for the compute pipeline.
//!
//! [`Sample`] extends [`num_traits::Float`] with the runtime [`Precision`]
//! tag and infallible `f64` conversions. It is implemented for `f32` and
//! `f64`, the two widths selectable through [`Precision`].

use crate::format::Precision;
use num_traits::Float;
use std::fmt::Debug;

/// Float type usable as an intermediate pipeline value.
pub trait Sample: Float + Default + Debug + Send + Sync + 'static {
    /// Matching runtime precision tag.
    const PRECISION: Precision;

    /// Narrow (or pass through) an `f64`.
    fn from_f64_lossy(v: f64) -> Self;

    /// Widen to `f64`.
    fn into_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($t:ty, $precision:expr) => {
        impl Sample for $t {
            const PRECISION: Precision = $precision;

            #[inline]
            fn from_f64_lossy(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn into_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_sample!(f32, Precision::Float32);
impl_sample!(f64, Precision::Float64);
