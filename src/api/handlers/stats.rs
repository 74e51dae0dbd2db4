//! Handler for short URL statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata and the full click history for a short code.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// Expired links still report their statistics until the reaper removes
/// them; only resolution stops at expiry. Client IPs are stored with each
/// click but never included in the response.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;

    Ok(Json(StatsResponse::from(stats)))
}
