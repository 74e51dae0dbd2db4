//! Background worker that persists click events.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::ExponentialBackoff;
use tracing::warn;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::geoip::GeoIpResolver;

/// Referrer sentinel stored when the request carried no Referer header.
pub const DIRECT_REFERRER: &str = "Direct";

/// Geo sentinel stored when the origin country cannot be determined.
pub const UNKNOWN_GEO: &str = "Unknown";

/// Consumes click events from the channel and appends them to the store.
///
/// The geo lookup is a local, offline resolution; it runs here rather than
/// on the redirect path so the HTTP response is never delayed by it.
/// Append failures are retried with exponential backoff and then dropped
/// with a warning: click recording is best-effort and must never surface to
/// the caller who already received the redirect.
///
/// The worker exits when the sending side of the channel is closed.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn UrlRepository>,
    geo: Arc<dyn GeoIpResolver>,
) {
    while let Some(event) = rx.recv().await {
        let country = event
            .ip
            .as_deref()
            .and_then(|ip| geo.country_code(ip))
            .unwrap_or_else(|| UNKNOWN_GEO.to_string());

        let click = NewClick {
            referrer: event
                .referrer
                .clone()
                .unwrap_or_else(|| DIRECT_REFERRER.to_string()),
            geo: country,
            ip: event.ip.clone(),
            user_agent: event.user_agent.clone(),
        };

        let strategy = ExponentialBackoff::from_millis(50).take(3);
        let result = Retry::spawn(strategy, || {
            let click = click.clone();
            let repository = repository.clone();
            let code = event.code.clone();
            async move { repository.append_click(&code, click).await }
        })
        .await;

        if let Err(e) = result {
            warn!(code = %event.code, error = %e, "failed to record click");
        }
    }
}
