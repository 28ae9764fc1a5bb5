//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured, request-ID correlated)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout via tracing-subscriber (EnvFilter controlled)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod metrics;
