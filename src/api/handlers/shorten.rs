//! Handler for the short URL creation endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::extract_host::extract_host;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,          // optional, minutes
///   "shortcode": "abc123"    // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the fully qualified short link and its expiry:
///
/// ```json
/// {
///   "shortLink": "https://short.example/abc123",
///   "expiry": "2026-01-01T00:30:00Z"
/// }
/// ```
///
/// The link host comes from the configured public base URL when set,
/// otherwise from the request's own Host header; behind a trusted proxy
/// the scheme follows `X-Forwarded-Proto`, else it defaults to `http`.
///
/// # Errors
///
/// Returns 400 for an invalid URL or shortcode and 409 when the requested
/// shortcode is already in use.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let record = state
        .url_service
        .create_short_url(payload.url, payload.validity, payload.shortcode)
        .await?;

    let base = match &state.public_base_url {
        Some(base) => base.trim_end_matches('/').to_string(),
        None => format!(
            "{}://{}",
            request_scheme(&headers, state.behind_proxy),
            extract_host(&headers)?
        ),
    };

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            short_link: format!("{}/{}", base, record.code),
            expiry: record.expires_at,
        }),
    ))
}

/// Scheme used for self-referential links when no public base URL is set.
///
/// `X-Forwarded-Proto` is client-controlled, so it is only trusted behind
/// a reverse proxy. TLS never terminates in this process, so the direct
/// case is plain `http`.
fn request_scheme(headers: &HeaderMap, behind_proxy: bool) -> &str {
    if behind_proxy
        && let Some(proto) = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    {
        return proto;
    }

    "http"
}
