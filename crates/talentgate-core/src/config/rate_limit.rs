//! Per-route request budget configuration.

use serde::{Deserialize, Serialize};

/// Fixed-window rate limit settings, shared by all throttled routes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per window.
    #[serde(default = "default_requests")]
    pub requests: u64,
    /// Window length in seconds.
    #[serde(default = "default_window")]
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests: default_requests(),
            window_seconds: default_window(),
        }
    }
}

fn default_requests() -> u64 {
    5
}

fn default_window() -> u64 {
    300
}
