//! Report file writer.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default report file name, relative to the working directory
pub const DEFAULT_REPORT_FILE: &str = "result.txt";

#[derive(Error, Debug)]
#[error("Failed to write report to {}: {source}", .path.display())]
pub struct ReportWriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Destination file for the final report
///
/// Each write replaces the whole file (created if missing, truncated
/// otherwise). There is no append mode.
#[derive(Debug, Clone)]
pub struct ReportFile {
    path: PathBuf,
}

impl ReportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, content: &str) -> Result<(), ReportWriteError> {
        std::fs::write(&self.path, content).map_err(|source| ReportWriteError {
            path: self.path.clone(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", content.len(), self.path.display());
        Ok(())
    }
}

impl Default for ReportFile {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_FILE)
    }
}
