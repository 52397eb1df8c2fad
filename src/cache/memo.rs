//! Memoizing wrapper around cache backends

use super::key::CacheKey;
use super::traits::CacheBackend;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default time-to-live for memoized results
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Memoizes operations against a shared cache backend.
///
/// Wraps any fallible async operation with read-through/write-through
/// caching under a fixed TTL. The contract is fail-open: a backend error on
/// read skips the cache for that call, a backend error on write is logged
/// and dropped, and the operation's own result is always what the caller
/// receives. Operation errors are never cached.
///
/// There is no explicit invalidation: an entry goes stale for at most one
/// TTL after the underlying document changes, which callers accept.
#[derive(Clone)]
pub struct ResultCache {
    backend: Arc<dyn CacheBackend>,
    ttl: Duration,
    bypass_reads: bool,
}

impl ResultCache {
    /// Create a cache wrapper with the default TTL
    pub fn new(backend: Arc<dyn CacheBackend>) -> Self {
        Self {
            backend,
            ttl: DEFAULT_TTL,
            bypass_reads: false,
        }
    }

    /// Override the TTL applied to every write
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Ignore cache hits (writes still happen). Used by test harnesses that
    /// need every call to exercise the underlying operation.
    pub fn with_read_bypass(mut self, bypass: bool) -> Self {
        self.bypass_reads = bypass;
        self
    }

    /// TTL applied to writes
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Run `op` through the cache under `key`.
    ///
    /// Returns the cached value on a usable hit; otherwise invokes `op`,
    /// best-effort stores its success value, and returns it. `op`'s errors
    /// propagate unchanged.
    pub async fn memoize<T, E, F, Fut>(&self, key: &CacheKey, op: F) -> Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let rendered = key.render();

        match self.backend.get(&rendered).await {
            Ok(Some(raw)) if !self.bypass_reads => {
                match serde_json::from_str(&raw) {
                    Ok(value) => {
                        debug!(operation = key.operation(), "cache hit");
                        return Ok(value);
                    }
                    Err(e) => {
                        // Corrupt payload: treat as a miss and overwrite below
                        warn!(operation = key.operation(), error = %e, "discarding undecodable cache entry");
                    }
                }
            }
            Ok(_) => {
                debug!(operation = key.operation(), "cache miss");
            }
            Err(e) => {
                // Fail open: compute directly, skip the write for this call
                warn!(operation = key.operation(), error = %e, "cache read failed, computing directly");
                return op().await;
            }
        }

        let value = op().await?;
        self.store(key, &rendered, &value).await;
        Ok(value)
    }

    /// Best-effort write; failures are absorbed.
    async fn store<T: Serialize>(&self, key: &CacheKey, rendered: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(operation = key.operation(), error = %e, "cache value not serializable, skipping write");
                return;
            }
        };
        if let Err(e) = self.backend.set(rendered, &raw, self.ttl).await {
            warn!(operation = key.operation(), error = %e, "cache write failed");
        }
    }
}
