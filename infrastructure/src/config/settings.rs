//! Run settings (defaults, environment, CLI overrides)

use census_application::CensusParams;
use census_domain::{OutputFormat, TAGS_PATH};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::report::DEFAULT_REPORT_FILE;

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CensusSettings {
    /// Per-probe timeout in seconds (connect + read)
    pub timeout_secs: u64,
    /// Maximum probes in flight; unset means no bound
    pub concurrency: Option<usize>,
    /// Sub-path appended to every endpoint
    pub tags_path: String,
    /// Report file path
    pub output: PathBuf,
    /// Report rendering
    pub format: OutputFormat,
}

impl Default for CensusSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            concurrency: None,
            tags_path: TAGS_PATH.to_string(),
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            format: OutputFormat::default(),
        }
    }
}

impl CensusSettings {
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Fan-out parameters for the census use case
    pub fn census_params(&self) -> CensusParams {
        let params = CensusParams::default().with_probe_timeout(self.probe_timeout());
        match self.concurrency {
            Some(0) | None => params.unbounded(),
            Some(limit) => params.with_concurrency(limit),
        }
    }
}

/// Values given explicitly on the command line
///
/// Unset fields are skipped during serialization so they never mask a
/// value from a lower-priority source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}
