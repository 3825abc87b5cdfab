//! Sample format module
//!
//! A complex measurement sample is a pair of numbers whose meaning is
//! fixed by its format tag:
//!
//! - `RI` - (real, imaginary)
//! - `MA` - (linear magnitude, angle in degrees)
//! - `DB` - (20*log10(magnitude), angle in degrees)
//!
//! Anything else is `Other`, an untagged column that is passed through
//! conversions untouched.

mod convert;

use std::fmt;
use thiserror::Error;

pub use convert::{
    convert_row, convert_sample, convert_samples, sample_to_complex, transform, unsupported_pairs,
    Transform,
};

/// One complex sample as the two numbers of its format
pub type Sample = (f64, f64);

/// Sample conversion errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Conversion from {from} to {to} is not implemented")]
    Unsupported { from: SParamFormat, to: SParamFormat },

    #[error("Invalid format tag: {0:?}")]
    InvalidFormatTag(String),

    #[error("Data row of length {0} does not hold whole samples after the frequency column")]
    RowLength(usize),
}

/// S-parameter sample format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SParamFormat {
    #[default]
    RI, // Real-Imaginary
    MA, // Magnitude-Angle (degrees)
    DB, // dB-Angle (degrees)
    Other,
}

impl SParamFormat {
    /// The three formats that carry a defined meaning
    pub const TAGGED: [SParamFormat; 3] = [SParamFormat::RI, SParamFormat::MA, SParamFormat::DB];

    /// Parse a column tag (case-insensitive). Unknown or empty tags map to `Other`.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "RI" => SParamFormat::RI,
            "MA" => SParamFormat::MA,
            "DB" => SParamFormat::DB,
            _ => SParamFormat::Other,
        }
    }

    pub fn is_tagged(&self) -> bool {
        !matches!(self, SParamFormat::Other)
    }

    /// Position in the conversion table, `None` for untagged
    pub(crate) fn index(&self) -> Option<usize> {
        match self {
            SParamFormat::RI => Some(0),
            SParamFormat::MA => Some(1),
            SParamFormat::DB => Some(2),
            SParamFormat::Other => None,
        }
    }
}

impl fmt::Display for SParamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            SParamFormat::RI => "RI",
            SParamFormat::MA => "MA",
            SParamFormat::DB => "DB",
            SParamFormat::Other => "untagged",
        };
        write!(f, "{}", tag)
    }
}

/// How unrecognised format tags are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagPolicy {
    /// Unknown tags are untagged columns and pass through
    #[default]
    PassThrough,
    /// Unknown tags are rejected with `InvalidFormatTag`
    Strict,
}

/// Caller-side converter options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConverterConfig {
    pub tag_policy: TagPolicy,
}

impl ConverterConfig {
    pub fn new(tag_policy: TagPolicy) -> Self {
        Self { tag_policy }
    }

    /// Parse a tag under this policy.
    ///
    /// An empty tag always means "no header" and yields `Other`.
    pub fn parse_format(&self, tag: &str) -> Result<SParamFormat, ConversionError> {
        let format = SParamFormat::from_str(tag);
        if format.is_tagged() || tag.trim().is_empty() {
            return Ok(format);
        }
        match self.tag_policy {
            TagPolicy::PassThrough => Ok(format),
            TagPolicy::Strict => Err(ConversionError::InvalidFormatTag(tag.to_string())),
        }
    }

    /// Convert a sample between two string tags
    pub fn convert(&self, sample: Sample, from: &str, to: &str) -> Result<Sample, ConversionError> {
        let from = self.parse_format(from)?;
        let to = self.parse_format(to)?;
        convert_sample(sample, from, to)
    }
}
