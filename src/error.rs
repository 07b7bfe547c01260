//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// Construction is the only fallible point in the API: every runtime
/// operation is total over its inputs, and absence of a key is reported
/// through `Option`, not through an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity of zero was passed at construction
    #[error("invalid capacity: must be greater than 0")]
    InvalidCapacity,
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
