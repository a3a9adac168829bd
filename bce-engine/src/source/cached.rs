//! Caching layer for table lookups.
//!
//! Fare displays evaluate the same few items and rules for every fare of a
//! market, so lookups are cached per key for a short time.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use moka::sync::Cache as MokaCache;

use crate::domain::VendorCode;
use crate::record::BceSequence;

use super::{RuleKey, SequenceSource, SourceError};

/// Cache key for item lookups: (vendor, item number).
type ItemKey = (VendorCode, u32);

/// Cache key for rule lookups: (rule key, travel date).
type RuleDateKey = (RuleKey, NaiveDate);

type Entry = Arc<Vec<BceSequence>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries per lookup kind.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// Table source with caching.
///
/// Wraps any [`SequenceSource`] and caches successful lookups, including
/// lookups that found nothing.
pub struct CachedSequenceSource<S> {
    inner: S,
    items: MokaCache<ItemKey, Entry>,
    rules: MokaCache<RuleDateKey, Entry>,
}

impl<S: SequenceSource> CachedSequenceSource<S> {
    /// Create a new cached source.
    pub fn new(inner: S, config: &CacheConfig) -> Self {
        Self {
            inner,
            items: build_cache(config),
            rules: build_cache(config),
        }
    }

    /// Access the underlying source for lookups that bypass the cache.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get cache statistics.
    pub fn entry_count(&self) -> u64 {
        self.items.entry_count() + self.rules.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.items.invalidate_all();
        self.rules.invalidate_all();
    }

    #[cfg(test)]
    fn run_pending_tasks(&self) {
        self.items.run_pending_tasks();
        self.rules.run_pending_tasks();
    }
}

fn build_cache<K, V>(config: &CacheConfig) -> MokaCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    MokaCache::builder()
        .time_to_live(config.ttl)
        .max_capacity(config.max_capacity)
        .build()
}

impl<S: SequenceSource> SequenceSource for CachedSequenceSource<S> {
    fn sequences_for_item(&self, vendor: VendorCode, item_no: u32) -> Result<Entry, SourceError> {
        let key = (vendor, item_no);
        if let Some(cached) = self.items.get(&key) {
            return Ok(cached);
        }
        let entry = self.inner.sequences_for_item(vendor, item_no)?;
        self.items.insert(key, entry.clone());
        Ok(entry)
    }

    fn sequences_for_rule(&self, key: &RuleKey, date: NaiveDate) -> Result<Entry, SourceError> {
        let cache_key = (key.clone(), date);
        if let Some(cached) = self.rules.get(&cache_key) {
            return Ok(cached);
        }
        let entry = self.inner.sequences_for_rule(key, date)?;
        self.rules.insert(cache_key, entry.clone());
        Ok(entry)
    }
}
