//! Cache Store Module
//!
//! Main cache engine combining the key index with the recency ledger and
//! LRU eviction. `CacheStore` is the single-owner core; wrap it in
//! [`crate::cache::Cache`] for shared, thread-safe access.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::ledger::RecencyLedger;
use crate::cache::record::Slot;
use crate::cache::CacheStats;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key-value storage with LRU eviction.
///
/// Two structures are kept mutually consistent: the index maps each key to
/// the slot of the record holding its value, and the recency ledger orders
/// those same records from most to least recently used. At the end of every
/// public operation the key sets of the two structures are identical and
/// their size never exceeds the configured capacity.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key → record slot index
    index: HashMap<K, Slot>,
    /// Recency ordering of the records
    ledger: RecencyLedger<K, V>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed, fixed at construction
    capacity: usize,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates a new, empty CacheStore with the given capacity.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is 0. This
    /// is the only failure in the whole API.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity);
        }
        debug!(capacity, "cache store created");
        Ok(Self {
            index: HashMap::with_capacity(capacity),
            ledger: RecencyLedger::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Retrieves the value for `key`, refreshing its recency.
    ///
    /// A hit counts toward the hit counter and moves the record to the
    /// front of the recency ledger: every successful access is a "use".
    /// A miss counts toward the miss counter and mutates nothing else.
    ///
    /// There is deliberately no peek-style lookup that skips the recency
    /// refresh; use [`CacheStore::contains_key`] for a pure existence test.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.index.get(key) {
            Some(&slot) => {
                self.stats.record_hit();
                self.ledger.move_to_front(slot);
                self.ledger.value(slot)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten in place and the
    /// record moves to the front; this touches no counter and consumes no
    /// capacity. If the key is new and the cache is full, the record at the
    /// back of the ledger is evicted first, so capacity is never exceeded,
    /// even transiently.
    ///
    /// # Returns
    /// The evicted `(key, value)` pair, if the insert displaced one.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&slot) = self.index.get(&key) {
            self.ledger.set_value(slot, value);
            self.ledger.move_to_front(slot);
            return None;
        }

        let evicted = if self.index.len() == self.capacity {
            self.evict_back()
        } else {
            None
        };

        let slot = self.ledger.push_front(key.clone(), value);
        self.index.insert(key, slot);

        debug_assert_eq!(self.index.len(), self.ledger.len());
        evicted
    }

    // == Delete ==
    /// Removes the entry for `key`, if present.
    ///
    /// Deleting an absent key is a no-op: no error, no counter change.
    pub fn delete(&mut self, key: &K) {
        if let Some(slot) = self.index.remove(key) {
            self.ledger.detach(slot);
        }
        debug_assert_eq!(self.index.len(), self.ledger.len());
    }

    // == Length ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Capacity ==
    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Contains ==
    /// Checks whether `key` is resident, without refreshing recency or
    /// touching the hit/miss counters.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Clear ==
    /// Empties the cache and resets all statistics counters to zero.
    pub fn clear(&mut self) {
        self.index.clear();
        self.ledger.clear();
        self.stats.reset();
        debug!("cache cleared");
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics counters.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    /// Resets the statistics counters without touching cache contents.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // == Eviction ==
    /// Removes the least recently used record: index mapping first, then
    /// the ledger record, then the eviction counter.
    fn evict_back(&mut self) -> Option<(K, V)> {
        let slot = self.ledger.back()?;
        let (key, _) = self.index.remove_entry(self.ledger.key(slot))?;
        let value = self.ledger.detach(slot);
        self.stats.record_eviction();
        trace!(len = self.index.len(), "evicted least recently used entry");
        value.map(|v| (key, v))
    }

    // == Invariant Check ==
    /// Asserts the index ↔ ledger bijection and the capacity bound.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        assert!(self.index.len() <= self.capacity, "capacity exceeded");
        assert_eq!(self.index.len(), self.ledger.len(), "index/ledger length mismatch");
        let mut seen = 0usize;
        for (key, _) in self.ledger.iter() {
            assert!(self.index.contains_key(key), "ledger key missing from index");
            seen += 1;
        }
        assert_eq!(seen, self.index.len(), "ledger holds keys the index does not");
    }

    /// Returns keys from most to least recently used, for order assertions.
    #[cfg(test)]
    pub(crate) fn keys_by_recency(&self) -> Vec<K> {
        self.ledger.iter().map(|(k, _)| k.clone()).collect()
    }
}
