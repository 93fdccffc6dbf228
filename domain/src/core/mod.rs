//! Core domain concepts shared across all subdomains.
//!
//! - [`endpoint::Endpoint`]: base URL of a model-serving host
//! - [`error::ProbeError`]: classified reasons a probe can fail

pub mod endpoint;
pub mod error;
