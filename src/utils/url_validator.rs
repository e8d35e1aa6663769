//! Target URL validation.
//!
//! Every target URL is checked before any persistence attempt: it must be
//! non-empty and parse as an absolute HTTP(S) URL.

use url::Url;

/// Errors that can occur during target URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL cannot be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a target URL without modifying it.
///
/// # Rules
///
/// 1. Must be non-empty
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http` or `https`
///
/// # Security
///
/// Rejecting non-HTTP(S) schemes keeps `javascript:`, `data:`, `file:` and
/// similar payloads out of the redirect path.
///
/// # Errors
///
/// Returns [`UrlValidationError::Empty`] for an empty string.
/// Returns [`UrlValidationError::InvalidFormat`] for anything `Url::parse`
/// rejects, including relative references.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_simple_http() {
        assert!(validate_target_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_simple_https() {
        assert!(validate_target_url("https://example.com").is_ok());
    }

    #[test]
    fn test_validate_with_path_and_query() {
        assert!(validate_target_url("https://example.com/a/b?q=rust&lang=en").is_ok());
    }

    #[test]
    fn test_validate_with_port() {
        assert!(validate_target_url("http://localhost:3000/test").is_ok());
    }

    #[test]
    fn test_validate_ip_address() {
        assert!(validate_target_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(matches!(
            validate_target_url(""),
            Err(UrlValidationError::Empty)
        ));
    }

    #[test]
    fn test_validate_not_a_url() {
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_relative_reference() {
        assert!(matches!(
            validate_target_url("/just/a/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_missing_scheme() {
        assert!(matches!(
            validate_target_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_validate_ftp_protocol() {
        assert!(matches!(
            validate_target_url("ftp://example.com/file.txt"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_javascript_protocol() {
        assert!(matches!(
            validate_target_url("javascript:alert('xss')"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_data_protocol() {
        assert!(matches!(
            validate_target_url("data:text/plain,Hello"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_mailto_protocol() {
        assert!(matches!(
            validate_target_url("mailto:test@example.com"),
            Err(UrlValidationError::UnsupportedProtocol)
        ));
    }

    #[test]
    fn test_validate_does_not_reject_long_urls() {
        let url = format!("https://example.com/{}", "a".repeat(2000));
        assert!(validate_target_url(&url).is_ok());
    }
}
