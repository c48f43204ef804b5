//! Single-entry rate snapshot cache with a fixed TTL.
//!
//! One cached value covers the whole watch list: a refresh fetches every
//! configured pair sequentially, absorbs per-pair failures into absent
//! rates, and replaces the previous snapshot wholesale. Requests arriving
//! within the TTL window all observe the same snapshot.

use crate::arguments::is_debug_cache_enabled;
use crate::logger::{self, LogTag};
use crate::pairs::{CurrencyPair, CONFIGURED_PAIRS};
use crate::rates::provider::RateProvider;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Cache TTL for rate snapshots (seconds)
pub const RATE_CACHE_TTL_SECS: i64 = 60;

/// One full batch of rate lookups. Pairs whose fetch failed map to None.
pub type RateSnapshot = HashMap<CurrencyPair, Option<f64>>;

// ============================================================================
// CACHE ENTRY
// ============================================================================

/// Cached snapshot with its creation timestamp
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub rates: RateSnapshot,
    pub cached_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn age_secs(&self, now: DateTime<Utc>) -> i64 {
        (now - self.cached_at).num_seconds()
    }

    /// Freshness is a pure function of the supplied clock so tests never
    /// have to sleep through a TTL.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl_secs: i64) -> bool {
        self.age_secs(now) < ttl_secs
    }
}

// ============================================================================
// RATE CACHE
// ============================================================================

/// Single-entry snapshot cache over a rate provider.
///
/// The lock guards the entry, not the refresh: concurrent callers that both
/// observe an expired entry will both run a full fetch sequence and the last
/// writer wins. Snapshots are replaced wholesale, never mutated in place, so
/// that race stays benign.
pub struct RateCache {
    provider: Arc<dyn RateProvider>,
    ttl_secs: i64,
    entry: RwLock<Option<CacheEntry>>,
}

impl RateCache {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self::with_ttl(provider, RATE_CACHE_TTL_SECS)
    }

    pub fn with_ttl(provider: Arc<dyn RateProvider>, ttl_secs: i64) -> Self {
        Self {
            provider,
            ttl_secs,
            entry: RwLock::new(None),
        }
    }

    /// Return the cached snapshot, refreshing first if it is stale or absent.
    pub async fn get(&self) -> RateSnapshot {
        let now = Utc::now();

        {
            let guard = self.entry.read().await;
            if let Some(entry) = guard.as_ref() {
                if entry.is_fresh(now, self.ttl_secs) {
                    if is_debug_cache_enabled() {
                        logger::log(
                            LogTag::Cache,
                            "CACHE_HIT",
                            &format!("snapshot age {}s", entry.age_secs(now)),
                        );
                    }
                    return entry.rates.clone();
                }
                if is_debug_cache_enabled() {
                    logger::log(
                        LogTag::Cache,
                        "CACHE_EXPIRED",
                        &format!(
                            "snapshot age {}s (ttl {}s)",
                            entry.age_secs(now),
                            self.ttl_secs
                        ),
                    );
                }
            }
        }

        // Lock released during the fetch sequence; see the type-level notes.
        let rates = self.refresh_all().await;

        let mut guard = self.entry.write().await;
        *guard = Some(CacheEntry {
            rates: rates.clone(),
            cached_at: Utc::now(),
        });
        rates
    }

    /// Drop the current snapshot so the next get() refreshes.
    pub async fn invalidate(&self) {
        let mut guard = self.entry.write().await;
        *guard = None;
        if is_debug_cache_enabled() {
            logger::log(LogTag::Cache, "CACHE_INVALIDATE", "snapshot dropped");
        }
    }

    /// Age of the current snapshot in seconds, if one exists.
    pub async fn age_secs(&self) -> Option<i64> {
        let guard = self.entry.read().await;
        guard.as_ref().map(|entry| entry.age_secs(Utc::now()))
    }

    /// Fetch every configured pair once, in list order, absorbing per-pair
    /// failures into absent rates. A single bad pair never aborts the batch.
    async fn refresh_all(&self) -> RateSnapshot {
        let started = Instant::now();
        let mut rates = RateSnapshot::with_capacity(CONFIGURED_PAIRS.len());
        let mut fetched = 0usize;
        let mut failed = 0usize;

        for pair in CONFIGURED_PAIRS.iter() {
            let (from_currency, to_currency) = pair.codes();
            match self.provider.fetch_rate(&from_currency, &to_currency).await {
                Ok(rate) => {
                    fetched += 1;
                    rates.insert(*pair, Some(rate));
                }
                Err(e) => {
                    failed += 1;
                    rates.insert(*pair, None);
                    if is_debug_cache_enabled() {
                        logger::log(LogTag::Cache, "FETCH_FAIL", &format!("{}: {}", pair, e));
                    }
                }
            }
        }

        logger::log_refresh_summary(fetched, failed, started.elapsed().as_millis());
        rates
    }
}
