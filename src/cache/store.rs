//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with TTL expiration and
//! capacity-based eviction.

use std::collections::HashMap;
use std::marker::PhantomData;

use serde::Serialize;
use tracing::{debug, trace};

use crate::cache::{canonical_key, CacheEntry, CacheStats, StatsSnapshot};
use crate::config::CacheConfig;
use crate::error::Result;

// == Cache ==
/// Bounded in-memory cache with per-cache TTL.
///
/// Keys are canonicalized into strings (see [`canonical_key`]) and map to
/// timestamped entries. Entries expire `ttl_ms` milliseconds after
/// insertion; expired entries are removed lazily on read and eagerly during
/// the prune pass that precedes every write.
///
/// When a write would grow the cache past `capacity`, the entry with the
/// soonest expiration is evicted. Because every entry carries the same
/// fixed TTL from its own insertion time, "soonest to expire" is "oldest
/// inserted": the policy is FIFO under a uniform TTL, not LRU. Reads do not
/// affect eviction order.
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Canonical-key to entry storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Entry time-to-live in milliseconds
    ttl_ms: u64,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Performance statistics
    stats: CacheStats,
    /// Caller-facing key type; only its canonical form is stored
    key_type: PhantomData<fn(K)>,
}

impl<K: Serialize, V: Clone> Cache<K, V> {
    // == Constructor ==
    /// Creates a new Cache from the given configuration.
    ///
    /// Fails with [`CacheError::InvalidConfig`](crate::error::CacheError)
    /// if `ttl_ms` or `capacity` is zero. No pruning or eviction occurs at
    /// construction.
    pub fn new(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            entries: HashMap::new(),
            ttl_ms: config.ttl_ms,
            capacity: config.capacity,
            stats: CacheStats::new(),
            key_type: PhantomData,
        })
    }

    /// Creates a new Cache with the default configuration
    /// (5 minute TTL, 100 entries).
    pub fn with_defaults() -> Self {
        let config = CacheConfig::default();

        Self {
            entries: HashMap::new(),
            ttl_ms: config.ttl_ms,
            capacity: config.capacity,
            stats: CacheStats::new(),
            key_type: PhantomData,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `Ok(None)` for a missing key, and for an expired key after
    /// removing it (lazy expiry). A successful read does not extend the
    /// entry's lifetime and never triggers capacity eviction; the cost is
    /// one map lookup regardless of cache size.
    ///
    /// # Errors
    /// Fails only when the key cannot be canonicalized.
    pub fn get(&mut self, key: &K) -> Result<Option<V>> {
        let canonical = canonical_key(key)?;

        if let Some(entry) = self.entries.get(&canonical) {
            // Expired entries are logically absent; drop on observation
            if entry.is_expired() {
                self.entries.remove(&canonical);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                trace!("Removed expired entry on read");
                return Ok(None);
            }

            let value = entry.value.clone();
            self.stats.record_hit();
            Ok(Some(value))
        } else {
            self.stats.record_miss();
            Ok(None)
        }
    }

    // == Set ==
    /// Stores a key-value pair, overwriting any prior entry under the same
    /// canonical key.
    ///
    /// Runs in three steps: prune every expired entry (so the dead do not
    /// count toward capacity), evict the soonest-expiring entry if the
    /// insert would grow the cache past capacity, then insert with a fresh
    /// expiration of now + `ttl_ms`. An overwrite never changes the entry
    /// count, so it never evicts. At most one entry is evicted per call.
    ///
    /// Both scans are O(n); no auxiliary ordering structure is maintained
    /// between writes.
    ///
    /// # Errors
    /// Fails only when the key cannot be canonicalized.
    pub fn set(&mut self, key: &K, value: V) -> Result<()> {
        let canonical = canonical_key(key)?;

        self.prune();

        // Only evict when this write will net-increase the entry count
        let is_overwrite = self.entries.contains_key(&canonical);
        if !is_overwrite && self.entries.len() >= self.capacity {
            self.evict_soonest_expiring();
        }

        self.entries
            .insert(canonical, CacheEntry::new(value, self.ttl_ms));
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Remove ==
    /// Removes an entry by key, returning its value if one was present.
    ///
    /// An expired entry is treated as absent.
    pub fn remove(&mut self, key: &K) -> Result<Option<V>> {
        let canonical = canonical_key(key)?;

        let removed = match self.entries.remove(&canonical) {
            Some(entry) if entry.is_expired() => {
                self.stats.record_expirations(1);
                None
            }
            Some(entry) => Some(entry.value),
            None => None,
        };
        self.stats.set_total_entries(self.entries.len());

        Ok(removed)
    }

    // == Clear ==
    /// Removes every entry unconditionally.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        debug!("Cleared {} entries", removed);
    }

    // == Contains ==
    /// Checks whether a live entry exists for the key.
    ///
    /// Pure observation: no removal, no statistics update.
    pub fn contains(&self, key: &K) -> Result<bool> {
        let canonical = canonical_key(key)?;

        Ok(self
            .entries
            .get(&canonical)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false))
    }

    // == Time To Live ==
    /// Returns the remaining lifetime of a live entry in milliseconds.
    ///
    /// `None` for missing or expired keys.
    pub fn ttl_remaining_ms(&self, key: &K) -> Result<Option<u64>> {
        let canonical = canonical_key(key)?;

        Ok(self
            .entries
            .get(&canonical)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.ttl_remaining_ms()))
    }

    // == Prune ==
    /// Removes all expired entries from the cache.
    ///
    /// Runs automatically at the start of every [`set`](Self::set); exposed
    /// for callers that want to reclaim space between writes. Returns the
    /// number of entries removed.
    pub fn prune(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            self.entries.remove(&key);
        }

        if count > 0 {
            self.stats.record_expirations(count as u64);
            debug!("Prune removed {} expired entries", count);
        }
        self.stats.set_total_entries(self.entries.len());

        count
    }

    // == Eviction ==
    /// Removes the entry with the smallest expiration timestamp.
    ///
    /// Ties are broken by whichever entry the scan encounters first.
    fn evict_soonest_expiring(&mut self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.expires_at)
            .map(|(key, _)| key.clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            self.stats.record_eviction();
            debug!("Capacity eviction removed soonest-expiring entry");
        }
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Captures a timestamped statistics snapshot.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot::new(&self.stats())
    }

    // == Length ==
    /// Returns the current number of stored entries.
    ///
    /// Counts entries physically present, including any that have expired
    /// but not yet been observed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Accessors ==
    /// Returns the configured maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the configured entry TTL in milliseconds.
    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }
}
