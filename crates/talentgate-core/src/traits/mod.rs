//! Shared trait abstractions.

pub mod cache;

pub use cache::CacheProvider;
