//! Cache backend trait definitions

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors from a cache backend
///
/// Internal only: the memoizing wrapper absorbs every variant (fail-open) and
/// no cache error ever reaches a service caller.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for cache backends
///
/// Implementations must be thread-safe (Send + Sync); per-key reads and
/// writes are atomic, so callers need no additional locking. Values are
/// opaque serialized strings; expiry is the backend's responsibility.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Look up a key. `Ok(None)` is a miss; expired entries are misses.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store a value under a key with a time-to-live, replacing any
    /// existing entry wholesale.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;
}
