//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{StatsService, UrlService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::UrlRepository;

/// Shared application state.
///
/// Services are held as trait-object-backed instances so handlers stay
/// agnostic of the configured store.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService<dyn UrlRepository>>,
    pub stats_service: Arc<StatsService<dyn UrlRepository>>,
    pub click_tx: mpsc::Sender<ClickEvent>,
    pub public_base_url: Option<String>,
    pub behind_proxy: bool,
}

impl AppState {
    /// Builds the state from a repository and runtime options.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        click_tx: mpsc::Sender<ClickEvent>,
        public_base_url: Option<String>,
        default_validity_minutes: i64,
        behind_proxy: bool,
    ) -> Self {
        Self {
            url_service: Arc::new(UrlService::new(
                repository.clone(),
                default_validity_minutes,
            )),
            stats_service: Arc::new(StatsService::new(repository)),
            click_tx,
            public_base_url,
            behind_proxy,
        }
    }
}
