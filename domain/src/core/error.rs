//! Domain error types

use thiserror::Error;

/// Why a single probe failed
///
/// The `Display` text of each variant is the human-readable message that
/// ends up in the endpoint's [`ProbeResult::ErrorReport`](crate::ProbeResult).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("Request error: connection timed out")]
    Timeout,

    #[error("Request error: {0}")]
    Transport(String),

    #[error("Request error: {0}")]
    HttpStatus(String),

    #[error("Response is not valid JSON")]
    InvalidJson,

    #[error("Response format unexpected")]
    UnexpectedFormat,
}

impl ProbeError {
    /// Short machine-friendly category name, used in logs and JSON reports
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Timeout => "timeout",
            ProbeError::Transport(_) => "transport",
            ProbeError::HttpStatus(_) => "http_status",
            ProbeError::InvalidJson => "invalid_json",
            ProbeError::UnexpectedFormat => "unexpected_format",
        }
    }
}
