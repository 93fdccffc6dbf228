//! Settings resolution for ollama-census
//!
//! There is no configuration file. Settings are merged from (highest to
//! lowest priority):
//!
//! 1. Command-line flags
//! 2. `OLLAMA_CENSUS_*` environment variables
//! 3. Default values

mod loader;
mod settings;

pub use loader::{ENV_PREFIX, SettingsLoader};
pub use settings::{CensusSettings, SettingsOverrides};
