//! Progress reporting for census runs

use census_application::ProgressNotifier;
use census_domain::{Endpoint, ProbeResult, ResultSet};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with a single progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_census_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Checking models");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_probe_start(&self, _endpoint: &Endpoint) {}

    fn on_probe_complete(&self, endpoint: &Endpoint, result: &ProbeResult) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if result.is_success() {
                format!("{} {}", "v".green(), endpoint)
            } else {
                format!("{} {}", "x".red(), endpoint)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_census_complete(&self, results: &ResultSet) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            let summary = results.summary();
            pb.finish_with_message(format!(
                "{} ({} reachable, {} failed)",
                "done".green(),
                summary.reachable,
                summary.failed
            ));
        }
    }
}

/// Simple text-based progress, one line per event
pub struct SimpleProgress;

impl SimpleProgress {
    /// Line printed when a probe finishes
    pub fn completion_line(endpoint: &Endpoint, result: &ProbeResult) -> String {
        match result {
            ProbeResult::ModelList { models } if models.is_empty() => {
                format!("  {} {} (no models)", "!".yellow(), endpoint)
            }
            ProbeResult::ModelList { models } => {
                format!("  {} {} ({} models)", "v".green(), endpoint, models.len())
            }
            ProbeResult::ErrorReport { error } => {
                format!("  {} {}: {}", "x".red(), endpoint, error)
            }
        }
    }
}

impl ProgressNotifier for SimpleProgress {
    fn on_census_start(&self, total: usize) {
        println!(
            "{} {} ({} endpoints)",
            "->".cyan(),
            "Starting model check".bold(),
            total
        );
    }

    fn on_probe_start(&self, endpoint: &Endpoint) {
        println!("Checking {}...", endpoint);
    }

    fn on_probe_complete(&self, endpoint: &Endpoint, result: &ProbeResult) {
        println!("{}", Self::completion_line(endpoint, result));
    }

    fn on_census_complete(&self, _results: &ResultSet) {
        println!();
    }
}
