//! CLI command definitions

use clap::builder::RangedU64ValueParser;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Upper bound accepted for `--concurrency`
pub const MAX_CONCURRENCY: u64 = 65_536;

/// Rendering of the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text, one block per endpoint
    Text,
    /// JSON document
    Json,
}

impl From<ReportFormat> for census_domain::OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => census_domain::OutputFormat::Text,
            ReportFormat::Json => census_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for ollama-census
#[derive(Parser, Debug)]
#[command(name = "ollama-census")]
#[command(author, version, about = "Check Ollama endpoints for their available models")]
#[command(long_about = r#"
ollama-census asks every endpoint in a URL list which models it serves
(GET <url>/api/tags) and writes a report to the console and to a file.

All endpoints are checked concurrently. Each request has its own timeout;
one slow or broken endpoint never holds up the others.

Settings can also be given through environment variables:
  OLLAMA_CENSUS_TIMEOUT_SECS, OLLAMA_CENSUS_CONCURRENCY, OLLAMA_CENSUS_TAGS_PATH,
  OLLAMA_CENSUS_OUTPUT, OLLAMA_CENSUS_FORMAT
Command-line flags take precedence.

Example:
  ollama-census urls.txt
  ollama-census -j 32 -t 5 -o census.json -f json urls.txt
"#)]
pub struct Cli {
    /// File with one endpoint base URL per line
    #[arg(value_name = "URL_FILE")]
    pub url_file: Option<PathBuf>,

    /// Report file (default: result.txt)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Report format (default: text)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Per-endpoint timeout in seconds (default: 10)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Maximum endpoints checked at once (default: all at once, 0 = no limit)
    #[arg(
        short = 'j',
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_CONCURRENCY)
    )]
    pub concurrency: Option<usize>,

    /// API path appended to every URL (default: /api/tags)
    #[arg(long, value_name = "PATH")]
    pub tags_path: Option<String>,

    /// Show a progress bar instead of per-endpoint progress lines
    #[arg(long, conflicts_with = "quiet")]
    pub progress_bar: bool,

    /// Suppress progress output (the report is still printed)
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
