//! Shared helpers for handler integration tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::mpsc;
use tower::Layer;

use shorturl_service::domain::click_event::ClickEvent;
use shorturl_service::domain::entities::NewShortUrl;
use shorturl_service::domain::repositories::UrlRepository;
use shorturl_service::infrastructure::persistence::MemoryUrlRepository;
use shorturl_service::state::AppState;

/// Builds handler state over a fresh in-memory store.
///
/// Returns the receiving end of the click channel so tests can assert on
/// emitted click events, plus the repository for direct seeding.
pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<MemoryUrlRepository>,
) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let (click_tx, click_rx) = mpsc::channel(100);

    let state = AppState::new(
        repository.clone(),
        click_tx,
        Some("http://short.test".to_string()),
        30,
        false,
    );

    (state, click_rx, repository)
}

/// Seeds a short URL directly into the store.
#[allow(dead_code)]
pub async fn create_test_url(
    repository: &MemoryUrlRepository,
    code: &str,
    original_url: &str,
    expires_at: DateTime<Utc>,
) {
    repository
        .insert(NewShortUrl {
            code: code.to_string(),
            original_url: original_url.to_string(),
            expires_at,
        })
        .await
        .unwrap();
}

/// Expiry comfortably in the future.
#[allow(dead_code)]
pub fn in_half_an_hour() -> DateTime<Utc> {
    Utc::now() + Duration::minutes(30)
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `axum_test::TestServer`, which has no real socket.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
