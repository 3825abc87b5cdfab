//! Mathematical functions module

pub mod conversions;

pub use conversions::*;
