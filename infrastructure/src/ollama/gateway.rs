//! reqwest-backed [`ModelInventoryGateway`] for Ollama hosts

use super::tags::decode_tags;
use async_trait::async_trait;
use census_application::ModelInventoryGateway;
use census_domain::{Endpoint, ProbeError, TAGS_PATH};
use std::error::Error as _;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Failure to construct the shared HTTP client
#[derive(Error, Debug)]
#[error("Failed to create HTTP client: {0}")]
pub struct GatewayInitError(#[from] reqwest::Error);

/// Lists models by calling `GET {endpoint}/api/tags`
///
/// One `reqwest::Client` (and its connection pool) is shared by every probe
/// of a run. The client timeout covers connect and read together.
#[derive(Debug, Clone)]
pub struct OllamaGateway {
    client: reqwest::Client,
    tags_path: String,
}

impl OllamaGateway {
    /// Create a gateway whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, GatewayInitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("ollama-census/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            tags_path: TAGS_PATH.to_string(),
        })
    }

    /// Override the model listing sub-path (default `/api/tags`)
    pub fn with_tags_path(mut self, path: impl Into<String>) -> Self {
        self.tags_path = path.into();
        self
    }
}

#[async_trait]
impl ModelInventoryGateway for OllamaGateway {
    async fn list_models(&self, endpoint: &Endpoint) -> Result<Vec<String>, ProbeError> {
        let url = endpoint.join(&self.tags_path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_request_error)?;

        let status = response.status();
        let response = response
            .error_for_status()
            .map_err(classify_request_error)?;

        let body = response.text().await.map_err(classify_request_error)?;
        debug!("{} answered {} ({} bytes)", url, status, body.len());

        decode_tags(&body)
    }
}

/// Map a reqwest failure onto the probe error taxonomy
fn classify_request_error(error: reqwest::Error) -> ProbeError {
    if error.is_timeout() {
        ProbeError::Timeout
    } else if error.is_status() {
        ProbeError::HttpStatus(error.to_string())
    } else {
        ProbeError::Transport(describe(&error))
    }
}

/// reqwest's top-level message plus its causes, e.g.
/// `error sending request for url (...): client error (Connect): tcp connect error: Connection refused`
fn describe(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
