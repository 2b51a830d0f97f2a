//! Memo Cache - a bounded in-memory key-value cache
//!
//! Caches serializable keys against cloneable values, expiring entries a
//! fixed TTL after insertion and evicting the soonest-expiring entry when
//! full. Under the cache-wide uniform TTL, that eviction order is
//! first-in-first-out; it is not LRU, and reads never reorder entries.
//!
//! # Example
//!
//! ```
//! use memo_cache::{Cache, CacheConfig};
//!
//! let mut cache = Cache::new(CacheConfig {
//!     ttl_ms: 60_000,
//!     capacity: 32,
//! })
//! .unwrap();
//!
//! cache.set(&"greeting", "hello".to_string()).unwrap();
//! assert_eq!(cache.get(&"greeting").unwrap(), Some("hello".to_string()));
//! ```
//!
//! For use across threads or to keep one instance alive for a scope, wrap
//! it in [`SharedCache`] and clone the handle.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, SharedCache, StatsSnapshot};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
