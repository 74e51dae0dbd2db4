//! Click statistics retrieval service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::{UrlRepository, UrlStats};
use crate::error::AppError;

/// Service for retrieving per-code click statistics.
///
/// Deliberately applies no expiry check: historical analytics remain
/// queryable for an expired record until the reaper physically removes it.
pub struct StatsService<S: UrlRepository + ?Sized> {
    repository: Arc<S>,
}

impl<S: UrlRepository + ?Sized> StatsService<S> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Retrieves a record with its full click history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record matches the code.
    pub async fn get_stats(&self, code: &str) -> Result<UrlStats, AppError> {
        self.repository
            .find_with_clicks(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "shortcode": code }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Click, ShortUrl};
    use crate::domain::repositories::MockUrlRepository;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_get_stats_success() {
        let mut mock_repo = MockUrlRepository::new();

        let record = ShortUrl::new(
            1,
            "abc123".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            Utc::now() + Duration::minutes(30),
        );
        let clicks = vec![
            Click::new(
                1,
                1,
                Utc::now() - Duration::seconds(2),
                "Direct".to_string(),
                "Unknown".to_string(),
                None,
                None,
            ),
            Click::new(
                2,
                1,
                Utc::now() - Duration::seconds(1),
                "https://google.com".to_string(),
                "US".to_string(),
                Some("203.0.113.9".to_string()),
                Some("Mozilla/5.0".to_string()),
            ),
        ];

        let stats = UrlStats {
            record: record.clone(),
            clicks,
        };

        mock_repo
            .expect_find_with_clicks()
            .withf(|code| code == "abc123")
            .times(1)
            .returning(move |_| Ok(Some(stats.clone())));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_stats("abc123").await.unwrap();
        assert_eq!(result.total_clicks(), 2);
        assert_eq!(result.record.code, "abc123");
        // Chronological order preserved.
        assert!(result.clicks[0].clicked_at <= result.clicks[1].clicked_at);
    }

    #[tokio::test]
    async fn test_get_stats_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_with_clicks()
            .times(1)
            .returning(|_| Ok(None));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_stats("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_stats_no_expiry_check() {
        let mut mock_repo = MockUrlRepository::new();

        // Expired but not yet reaped: stats remain available.
        let record = ShortUrl::new(
            1,
            "stale".to_string(),
            "https://example.com".to_string(),
            Utc::now() - Duration::minutes(60),
            Utc::now() - Duration::minutes(30),
        );

        let stats = UrlStats {
            record,
            clicks: vec![],
        };

        mock_repo
            .expect_find_with_clicks()
            .times(1)
            .returning(move |_| Ok(Some(stats.clone())));

        let service = StatsService::new(Arc::new(mock_repo));

        let result = service.get_stats("stale").await;
        assert!(result.is_ok());
    }
}
