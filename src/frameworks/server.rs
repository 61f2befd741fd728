// Framework bootstrap for the location service runtime.

use crate::domain::RandomTokenGenerator;
use crate::frameworks::config;
use crate::interface_adapters::clients::{NominatimClient, NominatimSettings};
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, InMemoryLocationStore, SystemClock};
use crate::use_cases::{EvictionSettings, spawn_eviction_sweeper};

use std::future::Future;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Serves `state` on `listener` until `shutdown` resolves.
///
/// The eviction sweeper lives exactly as long as the server: it is cancelled
/// once in-flight requests have drained.
pub async fn serve<F>(listener: tokio::net::TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = listener.local_addr()?;

    let cancel = CancellationToken::new();
    let sweeper = spawn_eviction_sweeper(
        state.store.clone(),
        SystemClock,
        EvictionSettings {
            interval: config::SWEEP_INTERVAL,
            ttl: config::RECORD_TTL,
        },
        cancel.clone(),
    );

    // Kept for parity with the existing API; anyone who can reach the port can read it.
    tracing::warn!("GET /debug-list exposes every stored location without authentication");

    let app = routes::app(Arc::new(state));
    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!(error = %e, "server error");
        });

    cancel.cancel();
    if let Err(e) = sweeper.await {
        tracing::error!(error = %e, "eviction sweeper did not stop cleanly");
    }
    tracing::info!("server stopped");

    served
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let port = listener.local_addr()?.port();
    let state = build_state(port)?;

    serve(listener, state, shutdown_signal()).await
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state(port: u16) -> Result<AppState> {
    let geocoder_url = config::geocoder_url();
    let geocoder = NominatimClient::new(NominatimSettings {
        endpoint: geocoder_url.clone(),
        timeout: config::GEOCODE_TIMEOUT,
        user_agent: config::USER_AGENT.to_string(),
        min_interval: config::GEOCODE_MIN_INTERVAL,
    })
    .map_err(|e| std::io::Error::other(format!("failed to initialize geocoder client: {e}")))?;
    tracing::debug!(
        geocoder_url = %geocoder_url,
        geocode_timeout_ms = config::GEOCODE_TIMEOUT.as_millis(),
        "geocoder client configured"
    );

    let public_base_url = config::public_base_url();
    if let Some(base_url) = &public_base_url {
        tracing::debug!(%base_url, "public base url configured");
    }

    Ok(AppState {
        store: Arc::new(InMemoryLocationStore::new(SystemClock)),
        geocoder: Arc::new(geocoder),
        tokens: Arc::new(RandomTokenGenerator::from_time_seed()),
        public_base_url,
        fallback_base_url: format!("http://localhost:{port}"),
    })
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server simply runs until killed.
            tracing::error!(error = %e, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
