//! Shared Cache Module
//!
//! Thread-safe handle for keeping one cache instance alive across a scope.
//!
//! A scope (a request pipeline, a worker, a long-lived component) creates
//! one `SharedCache` and hands clones to everything operating within it;
//! all clones address the same underlying cache. When the last clone is
//! dropped, the cache is released. No process-wide singleton is involved.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::cache::{Cache, CacheStats, StatsSnapshot};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Cache ==
/// Cloneable, thread-safe handle to a [`Cache`].
///
/// Every operation takes the lock for its full duration, so the
/// prune-evict-insert sequence inside `set` is atomic with respect to other
/// callers and the capacity bound holds under concurrent use.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    /// Thread-safe cache instance
    inner: Arc<RwLock<Cache<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K: Serialize, V: Clone> SharedCache<K, V> {
    // == Constructors ==
    /// Creates a new SharedCache from the given configuration.
    pub fn new(config: CacheConfig) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(Cache::new(config)?)),
        })
    }

    /// Creates a new SharedCache with the default configuration.
    pub fn with_defaults() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Cache::with_defaults())),
        }
    }

    // == Operations ==
    /// Retrieves a value by key.
    ///
    /// Takes the write lock: a read can remove an expired entry and always
    /// updates hit/miss statistics.
    pub fn get(&self, key: &K) -> Result<Option<V>> {
        self.write_lock().get(key)
    }

    /// Stores a key-value pair.
    pub fn set(&self, key: &K, value: V) -> Result<()> {
        self.write_lock().set(key, value)
    }

    /// Removes an entry by key, returning its value if one was present.
    pub fn remove(&self, key: &K) -> Result<Option<V>> {
        self.write_lock().remove(key)
    }

    /// Removes every entry unconditionally.
    pub fn clear(&self) {
        self.write_lock().clear();
    }

    /// Removes all expired entries, returning the number removed.
    pub fn prune(&self) -> usize {
        self.write_lock().prune()
    }

    /// Checks whether a live entry exists for the key.
    pub fn contains(&self, key: &K) -> Result<bool> {
        self.read_lock().contains(key)
    }

    /// Returns the remaining lifetime of a live entry in milliseconds.
    pub fn ttl_remaining_ms(&self, key: &K) -> Result<Option<u64>> {
        self.read_lock().ttl_remaining_ms(key)
    }

    // == Inspection ==
    /// Returns the current number of stored entries.
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.read_lock().stats()
    }

    /// Captures a timestamped statistics snapshot.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.read_lock().snapshot()
    }

    // == Locking ==
    // A poisoned lock still guards a structurally valid map; recover the
    // guard instead of propagating the poison.
    fn read_lock(&self) -> RwLockReadGuard<'_, Cache<K, V>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Cache<K, V>> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
