//! Sample conversion table
//!
//! Conversions are looked up in a fixed table keyed by (source, target)
//! rather than branched on, so the set of unsupported directions can be
//! enumerated and tested directly.

use num_complex::Complex64;
use tracing::{debug, trace};

use super::{ConversionError, SParamFormat, Sample};
use crate::math::conversions::{dbdeg_2_reim, magdeg_2_reim};

/// One cell of the conversion table
#[derive(Debug, Clone, Copy)]
pub enum Transform {
    /// Same format on both sides, or an untagged side
    Identity,
    Apply(fn(Sample) -> Sample),
    Unsupported,
}

fn ma_to_ri(sample: Sample) -> Sample {
    magdeg_2_reim(sample.0, sample.1)
}

fn db_to_ri(sample: Sample) -> Sample {
    dbdeg_2_reim(sample.0, sample.1)
}

// Rows are the source format, columns the target, both ordered RI, MA, DB.
static TABLE: [[Transform; 3]; 3] = [
    [Transform::Identity, Transform::Unsupported, Transform::Unsupported],
    [Transform::Apply(ma_to_ri), Transform::Identity, Transform::Unsupported],
    [Transform::Apply(db_to_ri), Transform::Unsupported, Transform::Identity],
];

/// Look up the transform from `from` to `to`
pub fn transform(from: SParamFormat, to: SParamFormat) -> Transform {
    match (from.index(), to.index()) {
        (Some(i), Some(j)) => TABLE[i][j],
        _ => Transform::Identity,
    }
}

/// All (source, target) pairs with no defined conversion
pub fn unsupported_pairs() -> Vec<(SParamFormat, SParamFormat)> {
    let mut pairs = Vec::new();
    for from in SParamFormat::TAGGED {
        for to in SParamFormat::TAGGED {
            if matches!(transform(from, to), Transform::Unsupported) {
                pairs.push((from, to));
            }
        }
    }
    pairs
}

/// Convert one sample from `from` to `to`.
///
/// Identity and untagged conversions return the input unchanged without
/// touching it numerically.
///
/// # Example
/// ```
/// use muncon_core::format::{convert_sample, SParamFormat};
/// let (re, im) = convert_sample((0.0, 0.0), SParamFormat::DB, SParamFormat::RI).unwrap();
/// assert!((re - 1.0).abs() < 1e-12 && im.abs() < 1e-12);
/// ```
pub fn convert_sample(
    sample: Sample,
    from: SParamFormat,
    to: SParamFormat,
) -> Result<Sample, ConversionError> {
    match transform(from, to) {
        Transform::Identity => {
            if !from.is_tagged() || !to.is_tagged() {
                trace!(%from, %to, "untagged sample passed through");
            }
            Ok(sample)
        }
        Transform::Apply(f) => Ok(f(sample)),
        Transform::Unsupported => {
            debug!(%from, %to, "unsupported sample conversion requested");
            Err(ConversionError::Unsupported { from, to })
        }
    }
}

/// Convert a slice of samples sharing the same formats
pub fn convert_samples(
    samples: &[Sample],
    from: SParamFormat,
    to: SParamFormat,
) -> Result<Vec<Sample>, ConversionError> {
    match transform(from, to) {
        Transform::Identity => Ok(samples.to_vec()),
        Transform::Apply(f) => Ok(samples.iter().map(|&s| f(s)).collect()),
        Transform::Unsupported => Err(ConversionError::Unsupported { from, to }),
    }
}

/// Convert a sample to a complex value. Untagged samples are read as RI.
pub fn sample_to_complex(sample: Sample, format: SParamFormat) -> Result<Complex64, ConversionError> {
    let (re, im) = convert_sample(sample, format, SParamFormat::RI)?;
    Ok(Complex64::new(re, im))
}

/// Convert a data row `[freq, v1, v2, v1, v2, ...]`.
///
/// The leading frequency column has no format and is copied as-is.
pub fn convert_row(
    row: &[f64],
    from: SParamFormat,
    to: SParamFormat,
) -> Result<Vec<f64>, ConversionError> {
    let Some((&freq, values)) = row.split_first() else {
        return Ok(Vec::new());
    };
    if values.len() % 2 != 0 {
        return Err(ConversionError::RowLength(row.len()));
    }

    let samples: Vec<Sample> = values.chunks_exact(2).map(|c| (c[0], c[1])).collect();
    let converted = convert_samples(&samples, from, to)?;

    let mut out = Vec::with_capacity(row.len());
    out.push(freq);
    for (v1, v2) in converted {
        out.push(v1);
        out.push(v2);
    }
    Ok(out)
}
