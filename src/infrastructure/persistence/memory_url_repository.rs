//! In-memory implementation of the URL repository.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{Click, NewClick, NewShortUrl, ShortUrl};
use crate::domain::repositories::{UrlRepository, UrlStats};
use crate::error::AppError;

/// Storage entry: the record plus its append-only click history.
#[derive(Debug, Clone)]
struct StoredUrl {
    record: ShortUrl,
    clicks: Vec<Click>,
}

/// In-memory repository backed by a sharded concurrent map.
///
/// DashMap's entry API gives atomic check-and-insert for the uniqueness
/// constraint, and click appends happen under the shard lock, so concurrent
/// appends on the same code never lose writes. Used when no `DATABASE_URL`
/// is configured and throughout the test suite.
pub struct MemoryUrlRepository {
    storage: DashMap<String, StoredUrl>,
    next_id: AtomicI64,
    next_click_id: AtomicI64,
}

impl MemoryUrlRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_id: AtomicI64::new(1),
            next_click_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        match self.storage.entry(new_url.code.clone()) {
            Entry::Occupied(_) => Err(AppError::shortcode_taken(
                "Shortcode already in use",
                json!({ "shortcode": new_url.code }),
            )),
            Entry::Vacant(vacant) => {
                let record = ShortUrl::new(
                    self.next_id.fetch_add(1, Ordering::Relaxed),
                    new_url.code,
                    new_url.original_url,
                    Utc::now(),
                    new_url.expires_at,
                );

                vacant.insert(StoredUrl {
                    record: record.clone(),
                    clicks: Vec::new(),
                });

                Ok(record)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        Ok(self.storage.get(code).map(|entry| entry.record.clone()))
    }

    async fn find_with_clicks(&self, code: &str) -> Result<Option<UrlStats>, AppError> {
        Ok(self.storage.get(code).map(|entry| UrlStats {
            record: entry.record.clone(),
            clicks: entry.clicks.clone(),
        }))
    }

    async fn append_click(&self, code: &str, click: NewClick) -> Result<(), AppError> {
        let Some(mut entry) = self.storage.get_mut(code) else {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "shortcode": code }),
            ));
        };

        let short_url_id = entry.record.id;
        entry.clicks.push(Click::new(
            self.next_click_id.fetch_add(1, Ordering::Relaxed),
            short_url_id,
            Utc::now(),
            click.referrer,
            click.geo,
            click.ip,
            click.user_agent,
        ));

        Ok(())
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        // Counted per dropped entry rather than by comparing map lengths:
        // inserts landing on already-swept shards during the retain would
        // skew a before/after length diff.
        let mut removed = 0u64;
        self.storage.retain(|_, stored| {
            let keep = stored.record.expires_at > cutoff;
            if !keep {
                removed += 1;
            }
            keep
        });
        Ok(removed)
    }
}
