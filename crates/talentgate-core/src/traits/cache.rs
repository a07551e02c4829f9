//! Cache provider trait for pluggable key-value backends.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for TTL-capable key-value backends (Redis or in-memory).
///
/// All values are stored as strings (JSON for structured data). A missing
/// or expired key is `Ok(None)` — a distinct condition from a transport
/// error, which surfaces as `Err`.
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key does not exist or has
    /// expired.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value with a TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// Delete a key. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Increment an integer value by 1, atomically attaching the given TTL
    /// when this increment creates the key. Subsequent increments within
    /// the window do **not** refresh the expiry. Returns the new count.
    async fn incr_with_ttl(&self, key: &str, ttl: Duration) -> AppResult<i64>;

    /// Remaining lifetime of a key, or `None` if the key does not exist.
    async fn ttl_remaining(&self, key: &str) -> AppResult<Option<Duration>>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
