//! Final census report rendering
//!
//! The rendered string is written verbatim to the report file and printed
//! verbatim to standard output, so it carries no terminal colors.

use census_domain::{CensusSummary, OutputFormat, ProbeEntry, ProbeResult, ResultSet};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Warning line for an endpoint that answered with an empty inventory
pub const NO_MODELS_WARNING: &str = "Warning: no models found";

/// Renders a [`ResultSet`] as the final report
pub struct ReportFormatter;

impl ReportFormatter {
    /// Render in the requested format, stamping JSON reports with the current time
    pub fn format(results: &ResultSet, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format_text(results),
            OutputFormat::Json => Self::format_json(results, Utc::now()),
        }
    }

    /// One block per entry, in input order, each followed by a blank line
    pub fn format_text(results: &ResultSet) -> String {
        results.iter().map(Self::format_entry).collect()
    }

    /// A single endpoint's block
    pub fn format_entry(entry: &ProbeEntry) -> String {
        let mut output = format!("URL: {}\n", entry.url);

        match &entry.result {
            ProbeResult::ModelList { models } if models.is_empty() => {
                output.push_str(NO_MODELS_WARNING);
                output.push('\n');
            }
            ProbeResult::ModelList { models } => {
                output.push_str("Available models:\n");
                for model in models {
                    output.push_str(&format!("  - {}\n", model));
                }
            }
            ProbeResult::ErrorReport { error } => {
                output.push_str(&format!("Error: {}\n", error));
            }
        }

        output.push('\n');
        output
    }

    /// Pretty-printed JSON document with a timestamp and summary counts
    pub fn format_json(results: &ResultSet, generated_at: DateTime<Utc>) -> String {
        let report = JsonReport {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            summary: results.summary(),
            endpoints: results,
        };
        let mut output = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string());
        output.push('\n');
        output
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    summary: CensusSummary,
    endpoints: &'a ResultSet,
}
