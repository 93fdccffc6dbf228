//! Outcome of probing a single endpoint

use crate::core::error::ProbeError;
use serde::{Deserialize, Serialize};

/// Result of one probe (Value Object)
///
/// Either the list of model names reported by the endpoint (possibly
/// empty) or a human-readable description of why the probe failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeResult {
    /// Model names in the order the endpoint returned them
    ModelList { models: Vec<String> },
    /// Why the probe failed
    ErrorReport { error: String },
}

impl ProbeResult {
    pub fn models(models: Vec<String>) -> Self {
        ProbeResult::ModelList { models }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ProbeResult::ErrorReport {
            error: message.into(),
        }
    }

    /// Returns `true` if the endpoint answered with a model list.
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeResult::ModelList { .. })
    }

    /// Model names, if the probe succeeded.
    pub fn model_names(&self) -> Option<&[String]> {
        match self {
            ProbeResult::ModelList { models } => Some(models),
            ProbeResult::ErrorReport { .. } => None,
        }
    }

    /// Error message, if the probe failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ProbeResult::ModelList { .. } => None,
            ProbeResult::ErrorReport { error } => Some(error),
        }
    }
}

impl From<Result<Vec<String>, ProbeError>> for ProbeResult {
    fn from(outcome: Result<Vec<String>, ProbeError>) -> Self {
        match outcome {
            Ok(models) => ProbeResult::models(models),
            Err(e) => ProbeResult::error(e.to_string()),
        }
    }
}
