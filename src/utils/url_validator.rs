//! Original URL validation.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that the input is a well-formed absolute http/https URL.
///
/// The URL is stored as submitted (after trimming); no normalization is
/// applied, so the redirect target is byte-for-byte what the caller sent.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if the input does not parse, uses a
/// scheme other than http/https, or lacks a host.
pub fn validate_url(input: &str) -> Result<String, AppError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(AppError::invalid_url("URL is required", json!({})));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        AppError::invalid_url("Invalid URL format", json!({ "reason": e.to_string() }))
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::invalid_url(
            "URL scheme must be http or https",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(AppError::invalid_url(
            "URL must have a host",
            json!({ "url": trimmed }),
        ));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        let result = validate_url("https://example.com/path?q=1");
        assert_eq!(result.unwrap(), "https://example.com/path?q=1");
    }

    #[test]
    fn test_valid_http_url() {
        assert!(validate_url("http://example.com").is_ok());
    }

    #[test]
    fn test_trims_whitespace() {
        let result = validate_url("  https://example.com  ");
        assert_eq!(result.unwrap(), "https://example.com");
    }

    #[test]
    fn test_empty_input() {
        let result = validate_url("");
        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl { .. }));
    }

    #[test]
    fn test_not_a_url() {
        let result = validate_url("not-a-url");
        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl { .. }));
    }

    #[test]
    fn test_relative_url_rejected() {
        let result = validate_url("/just/a/path");
        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = validate_url("ftp://example.com/file");
        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl { .. }));
    }

    #[test]
    fn test_missing_host_rejected() {
        let result = validate_url("http://");
        assert!(matches!(result.unwrap_err(), AppError::InvalidUrl { .. }));
    }
}
