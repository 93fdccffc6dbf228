//! CLI entrypoint for ollama-census
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use census_application::{NoProgress, ProgressNotifier, RunCensusInput, RunCensusUseCase};
use census_infrastructure::{
    OllamaGateway, ReportFile, SettingsLoader, SettingsOverrides, UrlFileReader,
};
use census_presentation::{Cli, ProgressReporter, ReportFormatter, SimpleProgress};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr; stdout carries progress and the report
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(cli, &mut std::io::stdout()).await
}

/// Run one census: read the URL list, probe every endpoint, write the
/// report file, then echo the same report to `out`.
async fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let Some(url_file) = cli.url_file.clone() else {
        Cli::command().write_help(out)?;
        writeln!(out)?;
        return Ok(());
    };

    let overrides = SettingsOverrides {
        timeout_secs: cli.timeout,
        concurrency: cli.concurrency,
        tags_path: cli.tags_path.clone(),
        output: cli.output.clone(),
        format: cli.format.map(Into::into),
    };
    let settings =
        SettingsLoader::load(&overrides).map_err(|e| anyhow!("Invalid settings: {}", e))?;
    info!("Settings: {:?}", settings);

    // Read URL list; a missing or unreadable file means nothing to do
    let endpoints = match UrlFileReader::new(&url_file).read() {
        Ok(endpoints) => endpoints,
        Err(e) => {
            warn!("{}", e);
            writeln!(out, "{}", e.to_string().red())?;
            Vec::new()
        }
    };

    if endpoints.is_empty() {
        writeln!(out, "No valid URLs found, please check the input file")?;
        return Ok(());
    }

    // === Dependency Injection ===
    let gateway = Arc::new(
        OllamaGateway::new(settings.probe_timeout())?.with_tags_path(settings.tags_path.clone()),
    );
    let use_case = RunCensusUseCase::new(gateway);

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if cli.progress_bar {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let input = RunCensusInput::new(endpoints).with_params(settings.census_params());
    let results = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    // Same content to the report file first, then to the console
    let report = ReportFormatter::format(&results, settings.format);
    let report_file = ReportFile::new(&settings.output);
    report_file
        .write(&report)
        .context("Could not save census results")?;
    write!(out, "{}", report)?;

    let summary = results.summary();
    writeln!(
        out,
        "{} {} endpoints checked: {} reachable, {} failed, {} models",
        "==".cyan(),
        summary.total,
        summary.reachable.to_string().green(),
        summary.failed.to_string().red(),
        summary.models
    )?;
    writeln!(
        out,
        "Check complete, results saved to {}",
        report_file.path().display()
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["ollama-census", "--quiet", "--no-color"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    async fn run_to_string(cli: Cli) -> String {
        let mut out = Vec::new();
        run(cli, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    fn path_str(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[tokio::test]
    async fn test_missing_url_file_prints_help() {
        let output = run_to_string(cli(&[])).await;
        assert!(output.contains("Usage"));
        assert!(output.contains("URL_FILE"));
    }

    #[tokio::test]
    async fn test_no_valid_urls_leaves_report_untouched() {
        let dir = tempdir().unwrap();
        let urls = dir.path().join("urls.txt");
        let report = dir.path().join("result.txt");
        fs::write(&urls, "\n   \n\t\n").unwrap();
        fs::write(&report, "previous run").unwrap();

        let output = run_to_string(cli(&["-o", path_str(&report), path_str(&urls)])).await;

        assert!(output.contains("No valid URLs found"));
        assert_eq!(fs::read_to_string(&report).unwrap(), "previous run");
    }

    #[tokio::test]
    async fn test_missing_url_file_reports_and_ends_quietly() {
        let dir = tempdir().unwrap();
        let report = dir.path().join("result.txt");
        let missing = dir.path().join("missing.txt");

        let output = run_to_string(cli(&["-o", path_str(&report), path_str(&missing)])).await;

        assert!(output.contains("does not exist"));
        assert!(output.contains("No valid URLs found"));
        assert!(!report.exists());
    }

    #[tokio::test]
    async fn test_report_file_matches_console_report() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "llama3:8b"}, {"name": "qwen2:7b"}]
            })))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let urls = dir.path().join("urls.txt");
        let report = dir.path().join("result.txt");
        fs::write(&urls, format!("{}\n\n  {}  \n", server.uri(), server.uri())).unwrap();
        fs::write(&report, "stale content that must be replaced").unwrap();

        let output = run_to_string(cli(&["-o", path_str(&report), path_str(&urls)])).await;
        let written = fs::read_to_string(&report).unwrap();

        let expected_block = format!(
            "URL: {}\nAvailable models:\n  - llama3:8b\n  - qwen2:7b\n\n",
            server.uri()
        );
        assert_eq!(written, expected_block.repeat(2));
        assert!(output.starts_with(&written));
        assert!(output.contains("Check complete, results saved to"));
    }
}
