//! In-memory TTL response cache.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use serde_json::Value;

use crate::observability::metrics;

/// A cached upstream response.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Value,
    created_at: Instant,
}

/// A thread-safe response cache with lazy TTL expiry.
///
/// Entries disappear only via TTL expiry at read time or process restart;
/// there is no size bound, no background sweep and no explicit invalidation.
/// Constructed once at startup and shared through `AppState` so tests can
/// hold an isolated instance.
#[derive(Clone)]
pub struct ResponseCache {
    inner: Arc<DashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl ResponseCache {
    /// Create a new empty cache with the given time-to-live.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Look up a key, removing and missing entries older than the TTL.
    pub fn get(&self, key: &str) -> Option<Value> {
        if let Some(entry) = self.inner.get(key) {
            if entry.created_at.elapsed() <= self.ttl {
                metrics::record_cache_hit();
                return Some(entry.value.clone());
            }
            drop(entry);
            self.inner.remove(key);
        }
        metrics::record_cache_miss();
        None
    }

    /// Store a value under a key, overwriting any previous entry.
    pub fn set(&self, key: &str, value: Value) {
        self.inner.insert(
            key.to_string(),
            CacheEntry {
                value,
                created_at: Instant::now(),
            },
        );
    }

    /// Number of physically present entries, expired or not.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache holds no entries at all.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
