//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use sqlx::Row;

use crate::domain::entities::{Click, NewClick, NewShortUrl, ShortUrl};
use crate::domain::repositories::{UrlRepository, UrlStats};
use crate::error::AppError;

/// PostgreSQL-backed repository.
///
/// Uniqueness of the short code is enforced by the `short_urls_code_key`
/// index, so concurrent inserts on the same code resolve at the database
/// and surface as [`AppError::ShortcodeTaken`]. Click appends are single
/// `INSERT ... SELECT` statements, safe under arbitrary concurrency.
pub struct PgUrlRepository {
    pool: PgPool,
}

impl PgUrlRepository {
    /// Creates a new repository over an established connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_short_url(row: &sqlx::postgres::PgRow) -> Result<ShortUrl, sqlx::Error> {
    Ok(ShortUrl {
        id: row.try_get("id")?,
        code: row.try_get("code")?,
        original_url: row.try_get("original_url")?,
        created_at: row.try_get("created_at")?,
        expires_at: row.try_get("expires_at")?,
    })
}

fn row_to_click(row: &sqlx::postgres::PgRow) -> Result<Click, sqlx::Error> {
    Ok(Click {
        id: row.try_get("id")?,
        short_url_id: row.try_get("short_url_id")?,
        clicked_at: row.try_get("clicked_at")?,
        referrer: row.try_get("referrer")?,
        geo: row.try_get("geo")?,
        ip: row.try_get("ip")?,
        user_agent: row.try_get("user_agent")?,
    })
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn insert(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        let row = sqlx::query(
            r#"
            INSERT INTO short_urls (code, original_url, expires_at)
            VALUES ($1, $2, $3)
            RETURNING id, code, original_url, created_at, expires_at
            "#,
        )
        .bind(&new_url.code)
        .bind(&new_url.original_url)
        .bind(new_url.expires_at)
        .fetch_one(&self.pool)
        .await?;

        row_to_short_url(&row).map_err(AppError::from)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT id, code, original_url, created_at, expires_at
            FROM short_urls
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(row_to_short_url)
            .transpose()
            .map_err(AppError::from)
    }

    async fn find_with_clicks(&self, code: &str) -> Result<Option<UrlStats>, AppError> {
        let Some(record) = self.find_by_code(code).await? else {
            return Ok(None);
        };

        let rows = sqlx::query(
            r#"
            SELECT id, short_url_id, clicked_at, referrer, geo, ip, user_agent
            FROM short_url_clicks
            WHERE short_url_id = $1
            ORDER BY clicked_at ASC, id ASC
            "#,
        )
        .bind(record.id)
        .fetch_all(&self.pool)
        .await?;

        let clicks = rows
            .iter()
            .map(row_to_click)
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::from)?;

        Ok(Some(UrlStats { record, clicks }))
    }

    async fn append_click(&self, code: &str, click: NewClick) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO short_url_clicks (short_url_id, referrer, geo, ip, user_agent)
            SELECT id, $2, $3, $4, $5
            FROM short_urls
            WHERE code = $1
            "#,
        )
        .bind(code)
        .bind(&click.referrer)
        .bind(&click.geo)
        .bind(&click.ip)
        .bind(&click.user_agent)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Short URL not found",
                serde_json::json!({ "shortcode": code }),
            ));
        }

        Ok(())
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM short_urls WHERE expires_at <= $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
