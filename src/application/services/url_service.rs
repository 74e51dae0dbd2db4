//! Short URL creation and resolution service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Validity applied when the caller supplies none, in minutes.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 30;

/// Collision retry budget for generated codes.
const MAX_ATTEMPTS: usize = 10;

/// Service for creating and resolving short URLs.
///
/// Handles URL validation, the explicit custom-code-or-generate branch,
/// expiry computation, and the read-time expiry check on resolution.
pub struct UrlService<S: UrlRepository + ?Sized> {
    repository: Arc<S>,
    default_validity_minutes: i64,
}

impl<S: UrlRepository + ?Sized> UrlService<S> {
    /// Creates a new URL service.
    pub fn new(repository: Arc<S>, default_validity_minutes: i64) -> Self {
        Self {
            repository,
            default_validity_minutes,
        }
    }

    /// Creates a short URL record.
    ///
    /// All validation runs before any persistence attempt. The custom-code
    /// path pre-checks for an existing record, but the store's uniqueness
    /// constraint stays authoritative: losing the insert race also surfaces
    /// as [`AppError::ShortcodeTaken`]. Without a custom code, a code is
    /// generated and the insert retried on collision. A validity of 0 is
    /// treated the same as an absent one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] for a malformed URL,
    /// [`AppError::InvalidShortcode`] for a bad custom code,
    /// [`AppError::ShortcodeTaken`] when the code is in use, and
    /// [`AppError::Store`] on persistence failures.
    pub async fn create_short_url(
        &self,
        original_url: String,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<ShortUrl, AppError> {
        let original_url = validate_url(&original_url)?;

        // A validity of 0 means "none given" and selects the default.
        let validity = validity_minutes
            .filter(|v| *v != 0)
            .unwrap_or(self.default_validity_minutes);
        let expires_at = Utc::now() + Duration::minutes(validity);

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            if self.repository.find_by_code(&custom).await?.is_some() {
                return Err(AppError::shortcode_taken(
                    "Shortcode already in use",
                    json!({ "shortcode": custom }),
                ));
            }

            return self
                .repository
                .insert(NewShortUrl {
                    code: custom,
                    original_url,
                    expires_at,
                })
                .await;
        }

        // Generated codes skip the pre-check; the duplicate-key error path
        // is the collision signal and a fresh code is tried.
        for _ in 0..MAX_ATTEMPTS {
            let result = self
                .repository
                .insert(NewShortUrl {
                    code: generate_code(),
                    original_url: original_url.clone(),
                    expires_at,
                })
                .await;

            match result {
                Err(AppError::ShortcodeTaken { .. }) => continue,
                other => return other,
            }
        }

        Err(AppError::store(
            "Failed to generate unique shortcode",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its record.
    ///
    /// Expiry is re-checked here on every call, independent of background
    /// reaping. An expired-but-unreaped record yields [`AppError::Expired`],
    /// never [`AppError::NotFound`].
    pub async fn resolve(&self, code: &str) -> Result<ShortUrl, AppError> {
        let record = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "shortcode": code }))
            })?;

        if record.is_expired() {
            return Err(AppError::expired(
                "This URL has expired",
                json!({ "shortcode": code, "expiry": record.expires_at }),
            ));
        }

        Ok(record)
    }
}
