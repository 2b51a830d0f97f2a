//! Cache Module
//!
//! Provides in-memory caching with TTL expiration and capacity-based
//! eviction.

mod entry;
mod key;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::canonical_key;
pub use shared::SharedCache;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::Cache;

// == Public Constants ==
/// Default entry time-to-live in milliseconds (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 300_000;

/// Default maximum number of entries
pub const DEFAULT_CAPACITY: usize = 100;
