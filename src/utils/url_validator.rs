//! Target URL validation.
//!
//! Stored URLs are kept byte-for-byte as submitted, so resolution hands back
//! exactly what the caller shortened. This module only decides whether the
//! input is acceptable, which includes being usable verbatim as a `Location`
//! header.

use url::Url;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("URL must not contain whitespace or control characters")]
    InvalidCharacter,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// Rejects potentially dangerous schemes like `javascript:`, `data:` and
/// `file:` as well as relative references.
///
/// # Errors
///
/// Returns the first rule the input violates.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_target_url("ftp://example.com").is_err());
/// assert!(validate_target_url("/relative/path").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // The parser silently drops tabs and newlines; the raw input is what gets stored.
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::InvalidCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_target_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_http_with_port_path_and_query() {
        assert!(validate_target_url("http://example.com:8080/path?key=value#frag").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let result = validate_target_url("   ");
        assert!(matches!(result, Err(UrlValidationError::Empty)));
    }

    #[test]
    fn test_validate_rejects_embedded_line_breaks_and_tabs() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\r\nLocation: evil",
            "https://exa\tmple.com",
            "https://example.com/a b",
            " https://example.com",
            "https://example.com/\u{7f}",
        ] {
            let result = validate_target_url(input);
            assert!(
                matches!(result, Err(UrlValidationError::InvalidCharacter)),
                "accepted {input:?}"
            );
        }
    }

    #[test]
    fn test_validate_accepts_percent_encoded_whitespace() {
        assert!(validate_target_url("https://example.com/a%20b%0A").is_ok());
    }

    #[test]
    fn test_validate_relative_url() {
        let result = validate_target_url("/just/a/path");
        assert!(matches!(result, Err(UrlValidationError::InvalidFormat(_))));
    }

    #[test]
    fn test_validate_not_a_url() {
        let result = validate_target_url("not-a-url");
        assert!(matches!(result, Err(UrlValidationError::InvalidFormat(_))));
    }

    #[test]
    fn test_validate_ftp_rejected() {
        let result = validate_target_url("ftp://example.com/file");
        assert!(matches!(result, Err(UrlValidationError::UnsupportedProtocol)));
    }

    #[test]
    fn test_validate_javascript_rejected() {
        let result = validate_target_url("javascript:alert(1)");
        assert!(matches!(result, Err(UrlValidationError::UnsupportedProtocol)));
    }

    #[test]
    fn test_validate_data_rejected() {
        let result = validate_target_url("data:text/plain,hello");
        assert!(matches!(result, Err(UrlValidationError::UnsupportedProtocol)));
    }

    #[test]
    fn test_validate_error_message() {
        let err = validate_target_url("mailto:someone@example.com").unwrap_err();
        assert!(err.to_string().contains("HTTP and HTTPS"));
    }
}
