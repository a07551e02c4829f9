//! In-memory cache implementation backed by dashmap.
//!
//! Expiry is lazy: entries carry an absolute deadline from the injected
//! [`Clock`] and are dropped on access once past it. Tests drive the
//! clock instead of sleeping.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use talentgate_core::clock::{Clock, SystemClock};
use talentgate_core::config::cache::MemoryCacheConfig;
use talentgate_core::result::AppResult;
use talentgate_core::traits::cache::CacheProvider;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory cache provider.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    entries: Arc<DashMap<String, Entry>>,
    max_capacity: u64,
    clock: Arc<dyn Clock>,
}

impl MemoryCacheProvider {
    /// Create a new in-memory cache from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create an in-memory cache with an explicit clock (for tests).
    pub fn with_clock(config: &MemoryCacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            max_capacity: config.max_capacity,
            clock,
        }
    }

    fn chrono_ttl(ttl: Duration) -> chrono::Duration {
        chrono::Duration::milliseconds(ttl.as_millis() as i64)
    }

    /// Drop expired entries when the map has grown past capacity.
    fn evict_if_full(&self) {
        if (self.entries.len() as u64) < self.max_capacity {
            return;
        }
        let now = self.clock.now();
        self.entries.retain(|_, entry| entry.expires_at > now);
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let now = self.clock.now();
        // The read guard must be dropped before `remove`, which takes a
        // write lock on the same shard.
        let expired = match self.entries.get(key) {
            Some(entry) if entry.expires_at > now => return Ok(Some(entry.value.clone())),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.evict_if_full();
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: self.clock.now() + Self::chrono_ttl(ttl),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn incr_with_ttl(&self, key: &str, ttl: Duration) -> AppResult<i64> {
        self.evict_if_full();
        let now = self.clock.now();

        // The dashmap entry guard gives exclusive access to this key, so
        // the read-increment-write below is atomic per key.
        let mut entry = self.entries.entry(key.to_string()).or_insert(Entry {
            value: "0".to_string(),
            expires_at: now + Self::chrono_ttl(ttl),
        });

        if entry.expires_at <= now {
            // Window elapsed: start a fresh one.
            entry.value = "0".to_string();
            entry.expires_at = now + Self::chrono_ttl(ttl);
        }

        let count = entry.value.parse::<i64>().unwrap_or(0) + 1;
        entry.value = count.to_string();
        Ok(count)
    }

    async fn ttl_remaining(&self, key: &str) -> AppResult<Option<Duration>> {
        let now = self.clock.now();
        match self.entries.get(key) {
            Some(entry) if entry.expires_at > now => {
                let remaining = entry.expires_at - now;
                Ok(Some(
                    remaining.to_std().unwrap_or(Duration::ZERO),
                ))
            }
            _ => Ok(None),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentgate_core::clock::ManualClock;

    fn provider_with_clock() -> (MemoryCacheProvider, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_now());
        let provider = MemoryCacheProvider::with_clock(
            &MemoryCacheConfig::default(),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );
        (provider, clock)
    }

    #[tokio::test]
    async fn set_get_delete_roundtrip() {
        let (cache, _clock) = provider_with_clock();

        cache.set("k", "v", Duration::from_secs(60)).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));

        cache.delete("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);

        // Deleting an absent key is not an error.
        cache.delete("k").await.unwrap();
    }

    #[tokio::test]
    async fn entries_expire_with_the_clock() {
        let (cache, clock) = provider_with_clock();

        cache.set("k", "v", Duration::from_secs(60)).await.unwrap();
        clock.advance(chrono::Duration::seconds(61));
        assert_eq!(cache.get("k").await.unwrap(), None);
        assert_eq!(cache.ttl_remaining("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn incr_counts_within_one_window() {
        let (cache, clock) = provider_with_clock();
        let window = Duration::from_secs(300);

        for expected in 1..=5 {
            let count = cache.incr_with_ttl("w", window).await.unwrap();
            assert_eq!(count, expected);
        }

        // A later increment inside the window must not refresh the expiry.
        clock.advance(chrono::Duration::seconds(200));
        cache.incr_with_ttl("w", window).await.unwrap();
        let remaining = cache.ttl_remaining("w").await.unwrap().unwrap();
        assert!(remaining <= Duration::from_secs(100));

        // After the window elapses the counter starts over.
        clock.advance(chrono::Duration::seconds(101));
        assert_eq!(cache.incr_with_ttl("w", window).await.unwrap(), 1);
    }
}
