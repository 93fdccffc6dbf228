//! Presentation layer for ollama-census
//!
//! This crate contains CLI definitions, the report formatter, and
//! progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, ReportFormat};
pub use output::report::{NO_MODELS_WARNING, ReportFormatter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
