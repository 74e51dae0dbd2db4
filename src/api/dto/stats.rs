//! DTOs for short URL statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::repositories::UrlStats;

/// Statistics for a single short URL: metadata plus the full click history
/// in chronological order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_clicks: usize,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub clicks: Vec<ClickInfo>,
}

impl From<UrlStats> for StatsResponse {
    fn from(stats: UrlStats) -> Self {
        Self {
            total_clicks: stats.total_clicks(),
            original_url: stats.record.original_url,
            created_at: stats.record.created_at,
            expiry: stats.record.expires_at,
            clicks: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
