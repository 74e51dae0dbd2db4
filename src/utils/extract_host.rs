//! Host extraction from HTTP request headers.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Extracts the host (including any port) from the `Host` header.
///
/// Used to build the fully qualified short link when no public base URL is
/// configured, mirroring what the client addressed the service as.
///
/// # Errors
///
/// Returns [`AppError::InvalidUrl`] if the `Host` header is missing or not
/// valid UTF-8.
pub fn extract_host(headers: &HeaderMap) -> Result<String, AppError> {
    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::invalid_url("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::invalid_url("Invalid Host header", serde_json::json!({})))?;

    Ok(host.to_string())
}
