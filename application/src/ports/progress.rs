//! Progress notification port
//!
//! Defines the interface for reporting live progress during a census run.

use census_domain::{Endpoint, ProbeResult, ResultSet};

/// Callback for progress updates during a census run
///
/// Implementations live in the presentation layer. These callbacks carry
/// live progress only; the final report is rendered separately from the
/// returned [`ResultSet`].
pub trait ProgressNotifier: Send + Sync {
    /// Called once before any probe is launched
    fn on_census_start(&self, total: usize);

    /// Called as each probe is launched, in input order
    fn on_probe_start(&self, endpoint: &Endpoint);

    /// Called as each probe finishes, in completion order
    fn on_probe_complete(&self, endpoint: &Endpoint, result: &ProbeResult);

    /// Called after every probe has finished
    fn on_census_complete(&self, _results: &ResultSet) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_census_start(&self, _total: usize) {}
    fn on_probe_start(&self, _endpoint: &Endpoint) {}
    fn on_probe_complete(&self, _endpoint: &Endpoint, _result: &ProbeResult) {}
}
