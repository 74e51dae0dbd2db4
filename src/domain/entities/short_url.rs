//! Short URL entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL record with its lifecycle metadata.
///
/// Maps a unique short code to the original URL. Every record carries an
/// expiry; once it passes, the record is treated as gone for resolution
/// purposes even before the reaper physically removes it.
#[derive(Debug, Clone)]
pub struct ShortUrl {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Creates a new ShortUrl instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Input data for creating a new short URL.
#[derive(Debug, Clone)]
pub struct NewShortUrl {
    pub code: String,
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
}
