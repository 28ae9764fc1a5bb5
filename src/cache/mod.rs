//! Response caching subsystem.
//!
//! # Design Decisions
//! - One process-wide cache, injected through `AppState` (not a module
//!   singleton) so each test owns an isolated instance
//! - Lazy expiry only: an entry past its TTL is evicted by the read that
//!   finds it; no background sweeper task
//! - No single-flight: concurrent misses for the same key each fetch
//!   upstream and the last write wins, which is benign because cached
//!   values are idempotent

pub mod key;
pub mod store;

pub use key::cache_key;
pub use store::ResponseCache;
