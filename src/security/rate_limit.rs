//! Inbound rate limiting middleware.
//!
//! Fixed-window counter per client IP, matching the original service's
//! 10 000 requests per 15-minute window. Windows reset lazily on the first
//! request past their end; there is no background sweeper.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::config::schema::RateLimitConfig;
use crate::observability::metrics;

/// One client's request count within the current window.
struct Window {
    count: u32,
    started_at: Instant,
}

/// Shared state for the fixed-window rate limiter.
pub struct RateLimiterState {
    windows: Mutex<HashMap<IpAddr, Window>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiterState {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_requests: config.max_requests,
            window: Duration::from_secs(config.window_secs),
        }
    }

    /// Record one request for a client, returning whether it is allowed.
    fn check(&self, client: IpAddr) -> bool {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        let now = Instant::now();
        let window = windows.entry(client).or_insert(Window {
            count: 0,
            started_at: now,
        });

        if now.duration_since(window.started_at) > self.window {
            window.count = 0;
            window.started_at = now;
        }

        if window.count < self.max_requests {
            window.count += 1;
            true
        } else {
            false
        }
    }
}

/// Middleware function for per-IP rate limiting.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<Arc<RateLimiterState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if state.check(addr.ip()) {
        next.run(request).await
    } else {
        tracing::warn!(client = %addr.ip(), "Rate limit exceeded");
        metrics::record_rate_limited();
        let mut response = Response::new(Body::from("Too many requests, please try again later."));
        *response.status_mut() = StatusCode::TOO_MANY_REQUESTS;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter(max_requests: u32, window_secs: u64) -> RateLimiterState {
        RateLimiterState::new(RateLimitConfig {
            enabled: true,
            max_requests,
            window_secs,
        })
    }

    #[test]
    fn allows_up_to_the_limit() {
        let state = limiter(3, 900);
        let client: IpAddr = "10.0.0.1".parse().unwrap();

        assert!(state.check(client));
        assert!(state.check(client));
        assert!(state.check(client));
        assert!(!state.check(client));
    }

    #[test]
    fn clients_are_isolated() {
        let state = limiter(1, 900);
        let a: IpAddr = "10.0.0.1".parse().unwrap();
        let b: IpAddr = "10.0.0.2".parse().unwrap();

        assert!(state.check(a));
        assert!(!state.check(a));
        assert!(state.check(b));
    }

    #[test]
    fn window_resets_after_elapsing() {
        let state = limiter(1, 0); // zero-length window expires immediately
        let client: IpAddr = "10.0.0.1".parse().unwrap();

        assert!(state.check(client));
        std::thread::sleep(Duration::from_millis(5));
        assert!(state.check(client));
    }
}
