//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::MAX_TTL_SECONDS;

/// Request to shorten a URL.
///
/// Field names follow the public API (`url`, `exp`); `target_url` and
/// `ttl_seconds` are accepted as aliases.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[serde(alias = "target_url")]
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Lifetime in seconds. Missing or `0` means the configured default.
    #[serde(default, rename = "exp", alias = "ttl_seconds")]
    #[validate(range(max = MAX_TTL_SECONDS, message = "exp exceeds the maximum lifetime"))]
    pub ttl_seconds: Option<u64>,
}

impl ShortenRequest {
    /// Resolves the TTL the core is called with.
    pub fn effective_ttl(&self, default_ttl_seconds: u64) -> u64 {
        match self.ttl_seconds {
            None | Some(0) => default_ttl_seconds,
            Some(ttl) => ttl,
        }
    }
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub message: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_effective_ttl_defaults() {
        let missing: ShortenRequest =
            serde_json::from_value(json!({ "url": "https://example.com" })).unwrap();
        assert_eq!(missing.effective_ttl(3600), 3600);

        let zero: ShortenRequest =
            serde_json::from_value(json!({ "url": "https://example.com", "exp": 0 })).unwrap();
        assert_eq!(zero.effective_ttl(3600), 3600);

        let explicit: ShortenRequest =
            serde_json::from_value(json!({ "url": "https://example.com", "exp": 60 })).unwrap();
        assert_eq!(explicit.effective_ttl(3600), 60);
    }

    #[test]
    fn test_aliases_are_accepted() {
        let request: ShortenRequest = serde_json::from_value(json!({
            "target_url": "https://example.com",
            "ttl_seconds": 120
        }))
        .unwrap();

        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.ttl_seconds, Some(120));
    }

    #[test]
    fn test_validate_rejects_malformed_url() {
        let request: ShortenRequest =
            serde_json::from_value(json!({ "url": "not a url" })).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_ttl_upper_bound() {
        let at_max: ShortenRequest = serde_json::from_value(
            json!({ "url": "https://example.com", "exp": MAX_TTL_SECONDS }),
        )
        .unwrap();
        assert!(at_max.validate().is_ok());

        let huge: ShortenRequest = serde_json::from_value(
            json!({ "url": "https://example.com", "exp": 100_000_000_000_000_000u64 }),
        )
        .unwrap();
        assert!(huge.validate().is_err());
    }

    #[test]
    fn test_negative_ttl_does_not_deserialize() {
        let result: Result<ShortenRequest, _> =
            serde_json::from_value(json!({ "url": "https://example.com", "exp": -5 }));
        assert!(result.is_err());
    }
}
