//! Background reaping of expired short URL records.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::domain::repositories::UrlRepository;

/// Periodically removes records whose expiry has passed.
///
/// Pure storage hygiene: `resolve` re-checks expiry at read time, so a
/// record that outlives its expiry between sweeps is still rejected. The
/// sweep never holds up foreground operations and its failures only degrade
/// housekeeping, not correctness.
pub async fn run_reaper(repository: Arc<dyn UrlRepository>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        match repository.delete_expired(Utc::now()).await {
            Ok(0) => debug!("reap pass removed nothing"),
            Ok(removed) => info!(removed, "reaped expired short urls"),
            Err(e) => warn!(error = %e, "reap pass failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewShortUrl;
    use crate::infrastructure::persistence::MemoryUrlRepository;
    use chrono::Duration as ChronoDuration;

    #[tokio::test]
    async fn test_reaper_removes_expired_records() {
        let repository = Arc::new(MemoryUrlRepository::new());

        repository
            .insert(NewShortUrl {
                code: "stale".to_string(),
                original_url: "https://example.com/old".to_string(),
                expires_at: Utc::now() - ChronoDuration::minutes(5),
            })
            .await
            .unwrap();
        repository
            .insert(NewShortUrl {
                code: "fresh".to_string(),
                original_url: "https://example.com/new".to_string(),
                expires_at: Utc::now() + ChronoDuration::minutes(30),
            })
            .await
            .unwrap();

        let reaper = tokio::spawn(run_reaper(
            repository.clone() as Arc<dyn UrlRepository>,
            Duration::from_millis(10),
        ));

        // Wait for at least one sweep.
        tokio::time::sleep(Duration::from_millis(50)).await;
        reaper.abort();

        assert!(repository.find_by_code("stale").await.unwrap().is_none());
        assert!(repository.find_by_code("fresh").await.unwrap().is_some());
    }
}
