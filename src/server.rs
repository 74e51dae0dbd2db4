//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, worker spawning, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::reaper::run_reaper;
use crate::domain::repositories::UrlRepository;
use crate::infrastructure::geoip::{GeoIpResolver, MaxMindResolver, NullResolver};
use crate::infrastructure::persistence::{MemoryUrlRepository, PgUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Repository (PostgreSQL pool with migrations, or in-memory store)
/// - GeoIP resolver (MaxMind database, or the null fallback)
/// - Background click worker and expiry reaper
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository: Arc<dyn UrlRepository> = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_url)
                .await?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations").run(&pool).await?;

            Arc::new(PgUrlRepository::new(pool))
        }
        None => {
            tracing::info!("No DATABASE_URL set, using in-memory store");
            Arc::new(MemoryUrlRepository::new())
        }
    };

    let geo: Arc<dyn GeoIpResolver> = if let Some(path) = &config.geoip_db_path {
        match MaxMindResolver::open(path) {
            Ok(resolver) => {
                tracing::info!("GeoIP enabled ({})", path);
                Arc::new(resolver)
            }
            Err(e) => {
                tracing::warn!("Failed to open GeoIP database: {}. Geo disabled.", e);
                Arc::new(NullResolver)
            }
        }
    } else {
        tracing::info!("GeoIP disabled");
        Arc::new(NullResolver)
    };

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);

    tokio::spawn(run_click_worker(click_rx, repository.clone(), geo));
    tracing::info!("Click worker started");

    tokio::spawn(run_reaper(
        repository.clone(),
        Duration::from_secs(config.reap_interval_seconds),
    ));
    tracing::info!("Expiry reaper started");

    let state = AppState::new(
        repository,
        click_tx,
        config.public_base_url.clone(),
        config.default_validity_minutes,
        config.behind_proxy,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
