//! Application layer for ollama-census
//!
//! This crate contains the census use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CensusParams, DEFAULT_PROBE_TIMEOUT};
pub use ports::{
    model_inventory::ModelInventoryGateway,
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_census::{RunCensusError, RunCensusInput, RunCensusUseCase};
