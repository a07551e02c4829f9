//! Fixed-window rate limiter over the shared cache.
//!
//! Each (route, caller) pair gets a counter whose TTL is the window
//! length. The window starts at the first request and is never
//! refreshed by later hits; when the counter expires the next request
//! opens a fresh window.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use talentgate_core::clock::Clock;
use talentgate_core::config::rate_limit::RateLimitConfig;
use talentgate_core::result::AppResult;
use talentgate_core::traits::cache::CacheProvider;

/// Outcome of counting one request against a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request is within the limit.
    pub allowed: bool,
    /// Configured ceiling for the window.
    pub limit: u64,
    /// Requests left in the current window.
    pub remaining: u64,
    /// When the current window ends.
    pub reset_at: DateTime<Utc>,
}

/// Counts requests per key in fixed windows.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    cache: Arc<dyn CacheProvider>,
    clock: Arc<dyn Clock>,
    limit: u64,
    window: Duration,
}

impl RateLimiter {
    pub fn new(cache: Arc<dyn CacheProvider>, clock: Arc<dyn Clock>, config: &RateLimitConfig) -> Self {
        Self {
            cache,
            clock,
            limit: config.requests,
            window: Duration::from_secs(config.window_seconds),
        }
    }

    /// Count one request against the key's window and decide.
    ///
    /// The request that crosses the limit is still counted, so a caller
    /// hammering a blocked route never sees the window reset early.
    pub async fn hit(&self, key: &str) -> AppResult<RateLimitDecision> {
        let count = self.cache.incr_with_ttl(key, self.window).await?;
        let count = count.max(0) as u64;

        let remaining_ttl = self
            .cache
            .ttl_remaining(key)
            .await?
            .unwrap_or(self.window);
        let reset_at = self.clock.now()
            + chrono::Duration::milliseconds(remaining_ttl.as_millis() as i64);

        let decision = RateLimitDecision {
            allowed: count <= self.limit,
            limit: self.limit,
            remaining: self.limit.saturating_sub(count),
            reset_at,
        };

        if !decision.allowed {
            debug!(key, count, limit = self.limit, "Rate limit exceeded");
        }
        Ok(decision)
    }

    /// Configured ceiling per window.
    pub fn limit(&self) -> u64 {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talentgate_cache::memory::MemoryCacheProvider;
    use talentgate_core::clock::ManualClock;
    use talentgate_core::config::cache::MemoryCacheConfig;

    fn limiter(limit: u64, window_seconds: u64) -> (RateLimiter, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::starting_now());
        let cache = Arc::new(MemoryCacheProvider::with_clock(
            &MemoryCacheConfig::default(),
            Arc::clone(&clock) as Arc<dyn Clock>,
        ));
        let limiter = RateLimiter::new(
            cache,
            Arc::clone(&clock) as Arc<dyn Clock>,
            &RateLimitConfig {
                requests: limit,
                window_seconds,
            },
        );
        (limiter, clock)
    }

    #[tokio::test]
    async fn counts_down_then_blocks() {
        let (limiter, _clock) = limiter(3, 300);

        for expected_remaining in [2, 1, 0] {
            let decision = limiter.hit("k").await.unwrap();
            assert!(decision.allowed);
            assert_eq!(decision.remaining, expected_remaining);
        }

        let blocked = limiter.hit("k").await.unwrap();
        assert!(!blocked.allowed);
        assert_eq!(blocked.remaining, 0);
    }

    #[tokio::test]
    async fn window_expiry_resets_the_counter() {
        let (limiter, clock) = limiter(1, 60);

        assert!(limiter.hit("k").await.unwrap().allowed);
        assert!(!limiter.hit("k").await.unwrap().allowed);

        clock.advance(chrono::Duration::seconds(61));
        assert!(limiter.hit("k").await.unwrap().allowed);
    }

    #[tokio::test]
    async fn keys_are_isolated() {
        let (limiter, _clock) = limiter(1, 60);

        assert!(limiter.hit("a").await.unwrap().allowed);
        assert!(!limiter.hit("a").await.unwrap().allowed);
        assert!(limiter.hit("b").await.unwrap().allowed);
    }

    #[tokio::test]
    async fn reset_at_tracks_the_window_start() {
        let (limiter, clock) = limiter(5, 300);

        let first = limiter.hit("k").await.unwrap();
        let window_end = first.reset_at;

        // A second hit later in the window must not push the reset out.
        clock.advance(chrono::Duration::seconds(100));
        let second = limiter.hit("k").await.unwrap();
        assert_eq!(second.reset_at, window_end);
    }
}
