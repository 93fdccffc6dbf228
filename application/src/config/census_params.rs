//! Census parameters: fan-out control for a run.

use std::time::Duration;

/// Default per-probe deadline (connect + read combined)
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Parameters that control how [`RunCensusUseCase`](crate::RunCensusUseCase)
/// fans out probes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CensusParams {
    /// Maximum number of probes in flight at once. `None` launches every
    /// probe immediately.
    pub concurrency: Option<usize>,
    /// Hard deadline per probe. A probe still running when it expires
    /// resolves to a timeout error report.
    pub probe_timeout: Option<Duration>,
}

impl Default for CensusParams {
    fn default() -> Self {
        Self {
            concurrency: None,
            probe_timeout: Some(DEFAULT_PROBE_TIMEOUT),
        }
    }
}

impl CensusParams {
    pub fn with_concurrency(mut self, limit: usize) -> Self {
        self.concurrency = Some(limit.max(1));
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.concurrency = None;
        self
    }

    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    pub fn without_probe_timeout(mut self) -> Self {
        self.probe_timeout = None;
        self
    }
}
