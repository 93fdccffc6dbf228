//! Report sinks

mod file;

pub use file::{DEFAULT_REPORT_FILE, ReportFile, ReportWriteError};
