//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum Router with the welcome and API handlers
//! - Wire up middleware (tracing, request ID, CORS, compression, hardening
//!   headers, timeout, rate limit) in front of the resolver
//! - Bind the server to a listener and serve with graceful shutdown
//! - Dispatch matched shapes to the resolver and surface errors once

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Path, State},
    http::header::{self, HeaderValue},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::cache::ResponseCache;
use crate::config::ProxyConfig;
use crate::http::error::route_not_found_response;
use crate::http::guide;
use crate::observability::metrics;
use crate::routing::{parse_shape, Resolver};
use crate::security::rate_limit::{rate_limit_middleware, RateLimiterState};
use crate::upstream::FipeClient;

/// Request ID generator: one UUID v4 per inbound request.
#[derive(Clone, Copy)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Resolver,
}

/// HTTP server for the FIPE proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let cache = ResponseCache::new(Duration::from_secs(config.cache.ttl_secs));
        let client = FipeClient::new(config.upstream.base_url.clone());
        let state = AppState {
            resolver: Resolver::new(cache, client),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/", get(root_handler))
            .route("/api", get(api_welcome_handler))
            .route("/api/", get(api_welcome_handler))
            .route("/api/{*path}", get(api_handler))
            .fallback(fallback_handler)
            .method_not_allowed_fallback(fallback_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive());

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("SAMEORIGIN"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_XSS_PROTECTION,
                    HeaderValue::from_static("0"),
                ));
        }

        if config.rate_limit.enabled {
            let limiter = Arc::new(RateLimiterState::new(config.rate_limit.clone()));
            router = router.layer(axum::middleware::from_fn_with_state(
                limiter,
                rate_limit_middleware,
            ));
        }

        // Outermost stack: assign the request ID before anything traces it.
        router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http()),
        )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Welcome payload for the bare root.
async fn root_handler() -> Response {
    Json(guide::welcome_root()).into_response()
}

/// Welcome payload for the API prefix.
async fn api_welcome_handler() -> Response {
    Json(guide::welcome_api()).into_response()
}

/// Main API handler: parse the simplified path, resolve, respond.
async fn api_handler(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    let start = Instant::now();

    let Some(shape) = parse_shape(&path) else {
        tracing::warn!(path = %path, "No route shape matched");
        metrics::record_request("unmatched", 404, start);
        return route_not_found_response();
    };

    let shape_name = shape.name();
    tracing::debug!(shape = shape_name, path = %path, "Resolving request");

    let response = match state.resolver.resolve(shape).await {
        Ok(value) => Json(value).into_response(),
        Err(err) => err.into_response(),
    };
    metrics::record_request(shape_name, response.status().as_u16(), start);
    response
}

/// Catch-all for unmatched paths and methods.
async fn fallback_handler() -> Response {
    route_not_found_response()
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
