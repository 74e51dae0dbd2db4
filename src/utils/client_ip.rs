//! Best-effort client IP extraction.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Extracts the request's origin network address.
///
/// When `behind_proxy` is set, forwarding headers are consulted first
/// (`X-Forwarded-For` takes the left-most entry, then `X-Real-IP`); enable
/// this only when the service runs behind a trusted reverse proxy, since the
/// headers are client-controlled otherwise. Falls back to the peer socket
/// address in all cases.
pub fn client_ip(headers: &HeaderMap, addr: SocketAddr, behind_proxy: bool) -> Option<String> {
    if behind_proxy {
        if let Some(forwarded) = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
        {
            return Some(forwarded.to_string());
        }

        if let Some(real_ip) = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
        {
            return Some(real_ip.to_string());
        }
    }

    Some(addr.ip().to_string())
}
