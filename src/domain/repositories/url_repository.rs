//! Repository trait for short URL data access.

use crate::domain::entities::{Click, NewClick, NewShortUrl, ShortUrl};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A short URL record together with its full click history.
///
/// Clicks are ordered chronologically (insertion order).
#[derive(Debug, Clone)]
pub struct UrlStats {
    pub record: ShortUrl,
    pub clicks: Vec<Click>,
}

impl UrlStats {
    /// Total number of recorded clicks.
    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}

/// Repository interface for short URL storage.
///
/// The store is the single source of truth for shortcode uniqueness: the
/// service layer may pre-check a code, but only the insert path decides
/// races. Click appends are atomic and safe under concurrent invocation.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-memory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Persists a new short URL record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeTaken`] if the code already exists.
    /// Returns [`AppError::Store`] on other persistence errors.
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError>;

    /// Finds a record by its short code (exact match, no prefix search).
    ///
    /// Returns `Ok(None)` when no record exists. Expiry is not checked here;
    /// callers decide how to treat expired records.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Finds a record together with its ordered click history.
    async fn find_with_clicks(&self, code: &str) -> Result<Option<UrlStats>, AppError>;

    /// Atomically appends one click event to the record's history.
    ///
    /// Concurrent appends on the same code must all be recorded; this is an
    /// append, never a read-modify-write of the whole record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code does not exist.
    async fn append_click(&self, code: &str, click: NewClick) -> Result<(), AppError>;

    /// Physically removes records whose expiry predates `cutoff`.
    ///
    /// Storage hygiene only: resolution correctness never depends on this,
    /// since expiry is re-checked at read time.
    ///
    /// Returns the number of removed records.
    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;
}
