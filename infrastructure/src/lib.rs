//! Infrastructure layer for ollama-census
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus file I/O and settings resolution.

pub mod config;
pub mod ollama;
pub mod report;
pub mod source;

// Re-export commonly used types
pub use config::{CensusSettings, ENV_PREFIX, SettingsLoader, SettingsOverrides};
pub use ollama::{GatewayInitError, OllamaGateway, decode_tags};
pub use report::{DEFAULT_REPORT_FILE, ReportFile, ReportWriteError};
pub use source::{UrlFileError, UrlFileReader};
