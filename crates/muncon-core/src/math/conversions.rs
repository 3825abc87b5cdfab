//! Scalar unit conversions used by the sample format table
//!
//! Angles are always given in degrees and converted to radians before
//! any trigonometric call.

use std::f64::consts::PI;

/// Convert degrees to radians
pub fn degree_2_radian(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert dB to linear magnitude (10^(dB/20))
pub fn db_2_magnitude(db: f64) -> f64 {
    10.0_f64.powf(db / 20.0)
}

/// Convert (magnitude, degree) to (real, imaginary)
pub fn magdeg_2_reim(mag: f64, deg: f64) -> (f64, f64) {
    let rad = degree_2_radian(deg);
    (mag * rad.cos(), mag * rad.sin())
}

/// Convert (dB, degree) to (real, imaginary)
pub fn dbdeg_2_reim(db: f64, deg: f64) -> (f64, f64) {
    magdeg_2_reim(db_2_magnitude(db), deg)
}
