//! Domain layer for ollama-census
//!
//! This crate contains the core entities and value objects of a census run.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Endpoint**: base URL of a host serving the Ollama API
//! - **Probe**: one `GET {endpoint}/api/tags` request/response cycle
//! - **ProbeResult**: the model list an endpoint reported, or why probing it failed
//! - **ResultSet**: every probe outcome of one run, in input order

pub mod census;
pub mod config;
pub mod core;

// Re-export commonly used types
pub use census::{
    probe_result::ProbeResult,
    result_set::{CensusSummary, ProbeEntry, ResultSet},
};
pub use config::OutputFormat;
pub use crate::core::{
    endpoint::{Endpoint, TAGS_PATH, parse_endpoint_list},
    error::ProbeError,
};
