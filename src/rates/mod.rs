//! Batched exchange-rate retrieval with a fixed-TTL snapshot cache.

pub mod cache;
pub mod provider;

pub use cache::{CacheEntry, RateCache, RateSnapshot, RATE_CACHE_TTL_SECS};
pub use provider::RateProvider;
