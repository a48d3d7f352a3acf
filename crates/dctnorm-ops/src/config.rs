//! Pipeline configuration.

use crate::log_op;
use dctnorm_core::{Error, OutputEncoding, Precision, Result};

/// Default number of suppressed anti-diagonal bands.
pub const DEFAULT_DCT_DISTANCE: i64 = 10;

/// Default logarithm base.
pub const DEFAULT_LOG_BASE: f64 = 2.0;

/// Parameters of [`normalize_illumination`](crate::normalize_illumination).
///
/// # Example
///
/// ```rust
/// use dctnorm_core::{OutputEncoding, Precision};
/// use dctnorm_ops::NormalizeOptions;
///
/// let opts = NormalizeOptions::default()
///     .with_dct_distance(5)
///     .with_output(OutputEncoding::Float32)
///     .with_precision(Precision::Float64);
/// assert!(opts.validate().is_ok());
///
/// assert!(opts.with_log_base(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NormalizeOptions {
    /// Number of anti-diagonal coefficient bands, starting at DC, to zero.
    /// 0 and 1 disable suppression; negative values are rejected.
    pub dct_distance: i64,
    /// Element type of the result.
    pub output: OutputEncoding,
    /// Float width of the internal pipeline.
    pub precision: Precision,
    /// Logarithm base; must be finite and > 1.
    pub log_base: f64,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            dct_distance: DEFAULT_DCT_DISTANCE,
            output: OutputEncoding::default(),
            precision: Precision::default(),
            log_base: DEFAULT_LOG_BASE,
        }
    }
}

impl NormalizeOptions {
    /// Set the suppression distance.
    pub fn with_dct_distance(mut self, distance: i64) -> Self {
        self.dct_distance = distance;
        self
    }

    /// Set the output encoding.
    pub fn with_output(mut self, output: OutputEncoding) -> Self {
        self.output = output;
        self
    }

    /// Set the compute precision.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the logarithm base.
    pub fn with_log_base(mut self, base: f64) -> Self {
        self.log_base = base;
        self
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] naming `dct_distance` or `log_base`.
    pub fn validate(&self) -> Result<()> {
        self.distance()?;
        log_op::validate_base(self.log_base)
    }

    /// Suppression distance as an unsigned band count.
    pub fn distance(&self) -> Result<usize> {
        usize::try_from(self.dct_distance).map_err(|_| {
            Error::invalid_parameter(
                "dct_distance",
                format!("{} must be zero or positive", self.dct_distance),
            )
        })
    }

    /// Whether any coefficients will be suppressed.
    pub fn suppresses(&self) -> bool {
        self.dct_distance > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = NormalizeOptions::default();
        assert_eq!(opts.dct_distance, 10);
        assert_eq!(opts.output, OutputEncoding::UInt8);
        assert_eq!(opts.precision, Precision::Float32);
        assert_eq!(opts.log_base, 2.0);
        assert!(opts.validate().is_ok());
        assert!(opts.suppresses());
    }

    #[test]
    fn test_negative_distance() {
        let err = NormalizeOptions::default()
            .with_dct_distance(-1)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("dct_distance"));
    }

    #[test]
    fn test_bad_base() {
        let err = NormalizeOptions::default()
            .with_log_base(0.9)
            .validate()
            .unwrap_err();
        assert_eq!(err.parameter(), Some("log_base"));
    }

    #[test]
    fn test_noop_distances() {
        for d in [0, 1] {
            let opts = NormalizeOptions::default().with_dct_distance(d);
            assert!(opts.validate().is_ok());
            assert!(!opts.suppresses());
            assert_eq!(opts.distance().unwrap(), d as usize);
        }
    }
}
