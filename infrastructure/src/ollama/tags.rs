//! Wire types for `GET /api/tags`

use census_domain::ProbeError;
use serde::Deserialize;

/// Body of an Ollama `/api/tags` response
///
/// Only the fields the census needs are declared; everything else the
/// server sends (size, digest, details, ...) is ignored.
#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<TagsModel>,
}

#[derive(Debug, Deserialize)]
struct TagsModel {
    name: String,
}

/// Decode a tags response body into model names, preserving order.
///
/// A body that is not JSON at all is [`ProbeError::InvalidJson`]. Valid JSON
/// of the wrong shape (not an object, `models` not a list, an entry without
/// a string `name`) is [`ProbeError::UnexpectedFormat`]. A missing `models`
/// key is an empty inventory.
pub fn decode_tags(body: &str) -> Result<Vec<String>, ProbeError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|_| ProbeError::InvalidJson)?;

    if !value.is_object() {
        return Err(ProbeError::UnexpectedFormat);
    }

    let tags: TagsResponse =
        serde_json::from_value(value).map_err(|_| ProbeError::UnexpectedFormat)?;

    Ok(tags.models.into_iter().map(|m| m.name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_names_in_order() {
        let body = r#"{"models":[{"name":"a"},{"name":"b"}]}"#;
        assert_eq!(decode_tags(body).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let body = r#"{
            "models": [
                {
                    "name": "llama3:8b",
                    "size": 4661224676,
                    "digest": "365c0bd3c000",
                    "details": {"parameter_size": "8.0B", "quantization_level": "Q4_0"}
                }
            ],
            "extra": true
        }"#;
        assert_eq!(decode_tags(body).unwrap(), vec!["llama3:8b"]);
    }

    #[test]
    fn test_empty_or_missing_models_is_empty_list() {
        assert!(decode_tags(r#"{"models":[]}"#).unwrap().is_empty());
        assert!(decode_tags("{}").unwrap().is_empty());
    }

    #[test]
    fn test_not_json() {
        assert_eq!(decode_tags("not json"), Err(ProbeError::InvalidJson));
        assert_eq!(decode_tags(""), Err(ProbeError::InvalidJson));
        assert_eq!(decode_tags("<html></html>"), Err(ProbeError::InvalidJson));
    }

    #[test]
    fn test_wrong_shape() {
        assert_eq!(
            decode_tags(r#"{"models":[{"model":"x"}]}"#),
            Err(ProbeError::UnexpectedFormat)
        );
        assert_eq!(
            decode_tags(r#"{"models":[{"name":42}]}"#),
            Err(ProbeError::UnexpectedFormat)
        );
        assert_eq!(
            decode_tags(r#"{"models":"llama3"}"#),
            Err(ProbeError::UnexpectedFormat)
        );
        assert_eq!(decode_tags(r#"{"models":null}"#), Err(ProbeError::UnexpectedFormat));
        assert_eq!(decode_tags(r#"[{"name":"a"}]"#), Err(ProbeError::UnexpectedFormat));
        assert_eq!(decode_tags("\"not json\""), Err(ProbeError::UnexpectedFormat));
    }
}
