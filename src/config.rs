//! Configuration Module
//!
//! Handles cache configuration with defaults and environment overrides.

use std::env;

use crate::cache::{DEFAULT_CAPACITY, DEFAULT_TTL_MS};
use crate::error::{CacheError, Result};

/// Cache configuration parameters.
///
/// Both values are captured once at construction and are immutable for the
/// cache's lifetime.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Entry time-to-live in milliseconds
    pub ttl_ms: u64,
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Entry TTL in milliseconds (default: 300000)
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 100)
    pub fn from_env() -> Self {
        Self {
            ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_MS),
            capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
        }
    }

    /// Validates the configuration.
    ///
    /// A zero TTL would expire every entry at insertion and a zero capacity
    /// would never bound the cache, so both are rejected eagerly instead of
    /// producing a degenerate cache. Negative values are unrepresentable.
    pub fn validate(&self) -> Result<()> {
        if self.ttl_ms == 0 {
            return Err(CacheError::InvalidConfig(
                "ttl_ms must be greater than zero".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(CacheError::InvalidConfig(
                "capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_TTL_MS,
            capacity: DEFAULT_CAPACITY,
        }
    }
}
