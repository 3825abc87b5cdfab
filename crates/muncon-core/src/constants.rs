//! Numerical constants and defaults

/// Reference impedance assumed when none is supplied (Ohm).
pub const DEFAULT_Z0: f64 = 50.0;

/// Tolerance for comparing converted samples in tests and checks.
pub const SAMPLE_TOL: f64 = 1e-9;
