//! Output encodings and compute precisions.
//!
//! # Types
//!
//! - [`OutputEncoding`] - Element type of the normalized result (u8, f32, f64)
//! - [`Precision`] - Float width used by the log/DCT/normalize stages
//!
//! Both parse from the lowercase type names callers commonly pass around:
//!
//! ```rust
//! use dctnorm_core::format::{OutputEncoding, Precision};
//!
//! let out: OutputEncoding = "uint8".parse().unwrap();
//! assert_eq!(out, OutputEncoding::UInt8);
//!
//! let p: Precision = "float64".parse().unwrap();
//! assert_eq!(p, Precision::Float64);
//!
//! assert!("float16".parse::<Precision>().is_err());
//! ```

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Element type of the normalized output.
///
/// - `UInt8` - integers in [0, 255]
/// - `Float32` / `Float64` - floats in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OutputEncoding {
    /// 8-bit unsigned integer [0, 255].
    #[default]
    UInt8,
    /// 32-bit float [0, 1].
    Float32,
    /// 64-bit float [0, 1].
    Float64,
}

impl OutputEncoding {
    /// Canonical lowercase name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UInt8 => "uint8",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Whether the encoding is floating point.
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Upper bound of the encoded range (255 or 1).
    #[inline]
    pub const fn max_value(&self) -> f64 {
        match self {
            Self::UInt8 => 255.0,
            Self::Float32 | Self::Float64 => 1.0,
        }
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uint8" | "u8" => Ok(Self::UInt8),
            "float32" | "f32" => Ok(Self::Float32),
            "float64" | "f64" => Ok(Self::Float64),
            other => Err(Error::invalid_parameter(
                "output_encoding",
                format!("unknown encoding '{other}', expected uint8, float32 or float64"),
            )),
        }
    }
}

/// Float width for the internal pipeline.
///
/// Affects numeric error only, never the semantics of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Precision {
    /// 32-bit single precision.
    #[default]
    Float32,
    /// 64-bit double precision.
    Float64,
}

impl Precision {
    /// Canonical lowercase name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Float32 => "float32",
            Self::Float64 => "float64",
        }
    }

    /// Number of bits per value.
    #[inline]
    pub const fn bits(&self) -> u32 {
        match self {
            Self::Float32 => 32,
            Self::Float64 => 64,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Precision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float32" | "f32" => Ok(Self::Float32),
            "float64" | "f64" => Ok(Self::Float64),
            other => Err(Error::invalid_parameter(
                "compute_precision",
                format!("unknown precision '{other}', expected float32 or float64"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_parse() {
        assert_eq!("uint8".parse::<OutputEncoding>().unwrap(), OutputEncoding::UInt8);
        assert_eq!("Float32".parse::<OutputEncoding>().unwrap(), OutputEncoding::Float32);
        assert_eq!(" float64 ".parse::<OutputEncoding>().unwrap(), OutputEncoding::Float64);
    }

    #[test]
    fn test_encoding_parse_unknown() {
        let err = "int16".parse::<OutputEncoding>().unwrap_err();
        assert_eq!(err.parameter(), Some("output_encoding"));
        assert!(err.to_string().contains("int16"));
    }

    #[test]
    fn test_precision_parse() {
        assert_eq!("float32".parse::<Precision>().unwrap(), Precision::Float32);
        assert_eq!("F64".parse::<Precision>().unwrap(), Precision::Float64);
        // uint8 is an output encoding, not a compute precision
        let err = "uint8".parse::<Precision>().unwrap_err();
        assert_eq!(err.parameter(), Some("compute_precision"));
    }

    #[test]
    fn test_display_roundtrip() {
        for enc in [OutputEncoding::UInt8, OutputEncoding::Float32, OutputEncoding::Float64] {
            assert_eq!(enc.to_string().parse::<OutputEncoding>().unwrap(), enc);
        }
        for p in [Precision::Float32, Precision::Float64] {
            assert_eq!(p.to_string().parse::<Precision>().unwrap(), p);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OutputEncoding::default(), OutputEncoding::UInt8);
        assert_eq!(Precision::default(), Precision::Float32);
        assert!(!OutputEncoding::UInt8.is_float());
        assert_eq!(OutputEncoding::Float32.max_value(), 1.0);
        assert_eq!(Precision::Float64.bits(), 64);
    }
}
