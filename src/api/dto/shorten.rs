//! DTOs for the short URL creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a short URL.
#[derive(Debug, Deserialize)]
pub struct CreateShortUrlRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    pub url: String,

    /// Optional validity window in minutes. Defaults server-side.
    pub validity: Option<i64>,

    /// Optional caller-chosen short code.
    pub shortcode: Option<String>,
}

/// Response for a created short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    /// Fully qualified short link.
    pub short_link: String,

    /// Moment after which the link stops redirecting.
    pub expiry: DateTime<Utc>,
}
