//! Error types for the cache
//!
//! Provides unified error handling using thiserror.
//!
//! Lookup misses are not errors: `get` on a missing or expired key returns
//! `Ok(None)`. Only malformed configuration and keys that cannot be
//! canonicalized are surfaced as errors.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Key could not be serialized into a canonical form
    #[error("Key cannot be canonicalized: {0}")]
    KeySerialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
