//! Endpoint value object

use serde::{Deserialize, Serialize};

/// Sub-path of the Ollama API that lists locally available models.
pub const TAGS_PATH: &str = "/api/tags";

/// Base URL of a model-serving host (Value Object)
///
/// The URL is kept exactly as written (after trimming surrounding
/// whitespace). No scheme check and no trailing-slash normalisation is
/// done: a malformed URL is carried through and fails at probe time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Endpoint {
    url: String,
}

impl Endpoint {
    /// Create an endpoint from a raw line, returning None if it is blank
    pub fn try_new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                url: trimmed.to_string(),
            })
        }
    }

    /// Get the base URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the full request URL for an API sub-path
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    /// Full URL of the model listing endpoint
    pub fn tags_url(&self) -> String {
        self.join(TAGS_PATH)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Parse newline-delimited text into endpoints.
///
/// Lines are trimmed and blank lines dropped; order and duplicates are kept.
pub fn parse_endpoint_list(text: &str) -> Vec<Endpoint> {
    text.lines().filter_map(Endpoint::try_new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_whitespace() {
        let endpoint = Endpoint::try_new("  http://10.0.0.1:11434 \t").unwrap();
        assert_eq!(endpoint.url(), "http://10.0.0.1:11434");
    }

    #[test]
    fn test_blank_endpoint_rejected() {
        assert!(Endpoint::try_new("").is_none());
        assert!(Endpoint::try_new("   \t ").is_none());
    }

    #[test]
    fn test_tags_url_is_not_normalised() {
        let endpoint = Endpoint::try_new("http://host:11434/").unwrap();
        assert_eq!(endpoint.tags_url(), "http://host:11434//api/tags");

        let endpoint = Endpoint::try_new("not-a-url").unwrap();
        assert_eq!(endpoint.tags_url(), "not-a-url/api/tags");
    }

    #[test]
    fn test_parse_endpoint_list_keeps_order_and_duplicates() {
        let text = "http://a\n\n   \n  http://b  \nhttp://a\r\n";
        let endpoints = parse_endpoint_list(text);
        let urls: Vec<&str> = endpoints.iter().map(|e| e.url()).collect();
        assert_eq!(urls, vec!["http://a", "http://b", "http://a"]);
    }

    #[test]
    fn test_parse_endpoint_list_empty() {
        assert!(parse_endpoint_list("").is_empty());
        assert!(parse_endpoint_list("\n \n\t\n").is_empty());
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let endpoint = Endpoint::try_new("http://a").unwrap();
        assert_eq!(serde_json::to_string(&endpoint).unwrap(), "\"http://a\"");
    }
}
