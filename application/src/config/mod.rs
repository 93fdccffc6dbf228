//! Application-level configuration.
//!
//! - [`CensusParams`]: fan-out control (concurrency bound, per-probe deadline)

pub mod census_params;

pub use census_params::{CensusParams, DEFAULT_PROBE_TIMEOUT};
