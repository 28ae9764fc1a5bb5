//! FIPE Proxy
//!
//! An HTTP façade over the FIPE vehicle-pricing table, built with Tokio and
//! Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                  FIPE PROXY                     │
//!  Client Request    │  ┌─────────┐   ┌──────────┐   ┌─────────────┐  │
//!  ──────────────────┼─▶│  http   │──▶│ routing  │──▶│    cache    │  │
//!                    │  │ server  │   │ resolver │   │  TTL store  │  │
//!                    │  └─────────┘   └────┬─────┘   └─────────────┘  │
//!                    │                     │ miss / uncached          │
//!                    │                     ▼                          │
//!  Client Response   │  ┌─────────┐   ┌──────────┐                    │   FIPE
//!  ◀─────────────────┼──│ error / │◀──│ upstream │◀───────────────────┼── upstream
//!                    │  │  guide  │   │  client  │  form-encoded POST │   service
//!                    │  └─────────┘   └──────────┘                    │
//!                    │                                                │
//!                    │  Cross-cutting: config, security (rate limit,  │
//!                    │  headers), observability (tracing, metrics)    │
//!                    └────────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fipe_proxy::config;
use fipe_proxy::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fipe_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("fipe-proxy v0.1.0 starting");

    // Load configuration (optional file + PORT / FIPE_API_URL overrides)
    let config = config::load_from_env()?;

    tracing::info!(
        port = config.listener.port,
        upstream = %config.upstream.base_url,
        cache_ttl_secs = config.cache.ttl_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Metrics exposition (opt-in)
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            fipe_proxy::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
