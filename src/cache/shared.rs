//! Shared Cache Module
//!
//! Thread-safe handle around [`CacheStore`] for concurrent callers.
//!
//! Every operation funnels through one `RwLock` scoped to the cache
//! instance. `get`, `put`, `delete`, and `clear` take the write lock —
//! `get` included, because a hit relinks the record at the front of the
//! recency ledger. `len`, `stats`, and `contains_key` mutate nothing and
//! take the read lock, but still participate in the same lock so they
//! never observe a half-applied operation. Every critical section is O(1),
//! so lock hold times are bounded and independent of cache size.

use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::cache::{CacheStats, CacheStore};
use crate::error::Result;

// == Shared Cache ==
/// Cloneable, thread-safe LRU cache handle.
///
/// Cloning the handle is cheap and shares the same underlying cache;
/// separate caches never share state or locks.
///
/// # Example
/// ```
/// use bounded_lru::Cache;
///
/// let cache: Cache<String, String> = Cache::new(2).unwrap();
/// cache.put("a".to_string(), "1".to_string());
/// cache.put("b".to_string(), "2".to_string());
/// cache.put("c".to_string(), "3".to_string()); // evicts "a"
///
/// assert_eq!(cache.get(&"a".to_string()), None);
/// assert_eq!(cache.get(&"c".to_string()), Some("3".to_string()));
/// ```
#[derive(Debug)]
pub struct Cache<K, V> {
    inner: Arc<RwLock<CacheStore<K, V>>>,
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K, V> Cache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new cache with a fixed positive capacity.
    ///
    /// # Errors
    /// Returns [`crate::CacheError::InvalidCapacity`] when `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            inner: Arc::new(RwLock::new(CacheStore::new(capacity)?)),
        })
    }

    // == Lock Helpers ==
    /// Acquires the write lock, recovering from poisoning: the store's
    /// invariants hold on every exit path of every operation, so state
    /// behind a poisoned lock is still consistent.
    fn write(&self) -> RwLockWriteGuard<'_, CacheStore<K, V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the read lock, recovering from poisoning.
    fn read(&self) -> RwLockReadGuard<'_, CacheStore<K, V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    // == Get ==
    /// Retrieves the value for `key`, marking it most recently used on a
    /// hit. Returns `None` on a miss; absence is not an error.
    pub fn get(&self, key: &K) -> Option<V> {
        self.write().get(key).cloned()
    }

    // == Put ==
    /// Stores a key-value pair, evicting the least recently used entry
    /// first when the cache is full. Never fails.
    pub fn put(&self, key: K, value: V) {
        self.write().put(key, value);
    }

    // == Delete ==
    /// Removes the entry for `key`; a no-op when the key is absent.
    pub fn delete(&self, key: &K) {
        self.write().delete(key);
    }

    // == Length ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // == Capacity ==
    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.read().capacity()
    }

    // == Contains ==
    /// Checks whether `key` is resident without refreshing its recency or
    /// touching the hit/miss counters.
    pub fn contains_key(&self, key: &K) -> bool {
        self.read().contains_key(key)
    }

    // == Clear ==
    /// Empties the cache and zeroes the statistics in one critical
    /// section: no observer can see emptied contents with stale counters
    /// or the other way around.
    pub fn clear(&self) {
        self.write().clear();
    }

    // == Stats ==
    /// Returns a snapshot of the hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.read().stats()
    }

    /// Resets the statistics counters without touching cache contents.
    pub fn reset_stats(&self) {
        self.write().reset_stats();
    }
}
