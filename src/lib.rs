//! Bounded LRU - A bounded in-memory key-value cache
//!
//! Provides a fixed-capacity cache with least-recently-used eviction,
//! hit/miss/eviction statistics, and a thread-safe shared handle.
//!
//! # Example
//! ```
//! use bounded_lru::Cache;
//!
//! let cache: Cache<&str, &str> = Cache::new(2).unwrap();
//! cache.put("a", "1");
//! cache.put("b", "2");
//! cache.get(&"a");       // "a" is now most recently used
//! cache.put("c", "3");   // evicts "b"
//!
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.stats().evictions, 1);
//! ```

pub mod cache;
pub mod error;

pub use cache::{Cache, CacheStats, CacheStore};
pub use error::{CacheError, Result};
