//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a short URL is resolved.
///
/// Captures metadata about each redirect for analytics: referrer (with the
/// `"Direct"` sentinel when absent), coarse geographic origin (`"Unknown"`
/// when the lookup fails), best-effort origin address, and user agent.
#[derive(Debug, Clone)]
pub struct Click {
    #[allow(dead_code)]
    pub id: i64,
    #[allow(dead_code)]
    pub short_url_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        short_url_id: i64,
        clicked_at: DateTime<Utc>,
        referrer: String,
        geo: String,
        ip: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            id,
            short_url_id,
            clicked_at,
            referrer,
            geo,
            ip,
            user_agent,
        }
    }
}

/// Input data for appending a click event to a record.
///
/// The sentinels for `referrer` and `geo` are applied before construction;
/// the timestamp is set by the store at append time.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub referrer: String,
    pub geo: String,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}
