//! HTTP surface subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum setup; request ID, trace, CORS, compression,
//!                  hardening headers, timeout, rate limit)
//!     → routing layer (shape parse + resolve)
//!     → error.rs (error envelopes) / guide.rs (welcome & catch-all payloads)
//!     → JSON response
//! ```

pub mod error;
pub mod guide;
pub mod server;

pub use server::HttpServer;
