//! muncon-core: S-parameter measurements with uncertainty
//!
//! ## Modules
//!
//! - `format` - Sample formats (RI, MA, DB) and conversion between them
//! - `math` - Scalar conversion helpers
//! - `network` - Uncertain network data container and matrix utilities
//! - `constants` - Shared defaults and tolerances

pub mod constants;
pub mod format;
pub mod math;
pub mod network;

pub use format::{convert_sample, ConversionError, ConverterConfig, SParamFormat, Sample};
pub use network::UncertainNetworkData;
