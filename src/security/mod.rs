//! Inbound protection subsystem.
//!
//! Rate limiting gates every request before the route resolver; the
//! hardening headers themselves are plain `tower-http` layers assembled in
//! `http::server`.

pub mod rate_limit;

pub use rate_limit::{rate_limit_middleware, RateLimiterState};
