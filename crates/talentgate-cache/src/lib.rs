//! # talentgate-cache
//!
//! Cache provider implementations for TalentGate:
//!
//! - **redis**: Redis-backed provider using the [redis](https://crates.io/crates/redis) crate
//! - **memory**: In-process provider using dashmap, with clock-driven expiry
//!
//! The provider is selected at runtime based on configuration. Sessions
//! and rate-limit counters both live behind this layer.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
