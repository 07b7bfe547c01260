//! Cache Module
//!
//! Provides bounded in-memory caching with LRU eviction and hit/miss
//! statistics. [`CacheStore`] is the single-owner engine; [`Cache`] wraps
//! it behind one lock for concurrent callers.

mod ledger;
mod record;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use shared::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
