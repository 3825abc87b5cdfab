//! Network module - S-parameter measurements with uncertainty
//!
//! Provides the `UncertainNetworkData` container and helpers for
//! reshaping S-parameter arrays.

mod core;
mod utils;

pub use core::UncertainNetworkData;
pub use utils::{pad_ports, swap_s12_s21};
