//! Recency Ledger Module
//!
//! Implements the recency ordering used for LRU eviction.
//!
//! Records live in an arena (`Vec`) and are chained into a doubly linked
//! list through slot indices rather than pointers, so every operation is
//! O(1) and no unsafe code is needed:
//! - Front = Most recently used
//! - Back = Least recently used
//!
//! Freed slots are recycled through an internal free list, so a cache that
//! has reached capacity never grows its arena again.

use crate::cache::record::{Record, Slot, NIL};

// == Recency Ledger ==
/// Doubly linked sequence of records ordered by recency of use.
#[derive(Debug)]
pub(crate) struct RecencyLedger<K, V> {
    /// Arena of records, addressed by stable slot index
    arena: Vec<Record<K, V>>,
    /// Slot of the most recently used record, `NIL` when empty
    front: Slot,
    /// Slot of the least recently used record, `NIL` when empty
    back: Slot,
    /// Head of the free list of recycled slots, chained through `next`
    free: Slot,
    /// Number of live (linked) records
    len: usize,
}

impl<K, V> RecencyLedger<K, V> {
    // == Constructor ==
    /// Creates an empty ledger with arena space for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Vec::with_capacity(capacity),
            front: NIL,
            back: NIL,
            free: NIL,
            len: 0,
        }
    }

    // == Length ==
    /// Returns the number of linked records.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no records are linked.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Back ==
    /// Returns the slot of the least recently used record.
    pub fn back(&self) -> Option<Slot> {
        if self.back == NIL {
            None
        } else {
            Some(self.back)
        }
    }

    // == Accessors ==
    /// Returns the key stored in `slot`.
    pub fn key(&self, slot: Slot) -> &K {
        &self.arena[slot].key
    }

    /// Returns the value stored in `slot`, if the slot is live.
    pub fn value(&self, slot: Slot) -> Option<&V> {
        self.arena[slot].value.as_ref()
    }

    /// Replaces the value stored in `slot`.
    pub fn set_value(&mut self, slot: Slot, value: V) {
        self.arena[slot].value = Some(value);
    }

    // == Push Front ==
    /// Allocates a record for `key`/`value` and links it at the front
    /// (most recently used). Returns the record's slot.
    pub fn push_front(&mut self, key: K, value: V) -> Slot {
        let slot = self.alloc(key, value);
        self.link_front(slot);
        self.len += 1;
        slot
    }

    // == Move To Front ==
    /// Relinks an existing record at the front (most recently used).
    pub fn move_to_front(&mut self, slot: Slot) {
        if self.front == slot {
            return;
        }
        self.unlink(slot);
        self.link_front(slot);
    }

    // == Detach ==
    /// Unlinks the record at `slot`, frees the slot for reuse, and moves
    /// the stored value out of the arena.
    pub fn detach(&mut self, slot: Slot) -> Option<V> {
        self.unlink(slot);
        self.len -= 1;
        let value = self.arena[slot].value.take();
        // chain the freed slot into the free list
        self.arena[slot].next = self.free;
        self.free = slot;
        value
    }

    // == Clear ==
    /// Drops every record and resets the ledger to empty.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.front = NIL;
        self.back = NIL;
        self.free = NIL;
        self.len = 0;
    }

    // == Iterate ==
    /// Iterates over live records from most to least recently used.
    #[cfg(test)]
    pub fn iter(&self) -> LedgerIter<'_, K, V> {
        LedgerIter {
            arena: &self.arena,
            current: self.front,
        }
    }

    // == Internal Linking ==
    /// Takes a slot from the free list, or grows the arena.
    fn alloc(&mut self, key: K, value: V) -> Slot {
        if self.free != NIL {
            let slot = self.free;
            self.free = self.arena[slot].next;
            self.arena[slot] = Record::new(key, value);
            slot
        } else {
            let slot = self.arena.len();
            self.arena.push(Record::new(key, value));
            slot
        }
    }

    /// Links an unlinked record at the front of the list.
    fn link_front(&mut self, slot: Slot) {
        self.arena[slot].prev = NIL;
        self.arena[slot].next = self.front;

        if self.front != NIL {
            self.arena[self.front].prev = slot;
        }
        self.front = slot;

        if self.back == NIL {
            self.back = slot;
        }
    }

    /// Removes a record from the chain without freeing its slot.
    fn unlink(&mut self, slot: Slot) {
        let prev = self.arena[slot].prev;
        let next = self.arena[slot].next;

        if prev != NIL {
            self.arena[prev].next = next;
        } else {
            self.front = next;
        }

        if next != NIL {
            self.arena[next].prev = prev;
        } else {
            self.back = prev;
        }

        self.arena[slot].prev = NIL;
        self.arena[slot].next = NIL;
    }
}

// == Ledger Iterator ==
/// Iterator over live records, most recently used first.
#[cfg(test)]
pub(crate) struct LedgerIter<'a, K, V> {
    arena: &'a [Record<K, V>],
    current: Slot,
}

#[cfg(test)]
impl<'a, K, V> Iterator for LedgerIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NIL {
            return None;
        }
        let record = &self.arena[self.current];
        self.current = record.next;
        record.value.as_ref().map(|v| (&record.key, v))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys<'a>(ledger: &'a RecencyLedger<&'a str, u32>) -> Vec<&'a str> {
        ledger.iter().map(|(k, _)| *k).collect()
    }

    #[test]
    fn test_ledger_new_is_empty() {
        let ledger: RecencyLedger<&str, u32> = RecencyLedger::with_capacity(4);
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.back(), None);
    }

    #[test]
    fn test_push_front_orders_most_recent_first() {
        let mut ledger = RecencyLedger::with_capacity(4);
        ledger.push_front("a", 1);
        ledger.push_front("b", 2);
        ledger.push_front("c", 3);

        assert_eq!(ledger.len(), 3);
        assert_eq!(keys(&ledger), vec!["c", "b", "a"]);
        // "a" was pushed first, so it sits at the back
        let back = ledger.back().unwrap();
        assert_eq!(*ledger.key(back), "a");
    }

    #[test]
    fn test_move_to_front_reorders() {
        let mut ledger = RecencyLedger::with_capacity(4);
        let a = ledger.push_front("a", 1);
        ledger.push_front("b", 2);
        ledger.push_front("c", 3);

        ledger.move_to_front(a);

        assert_eq!(keys(&ledger), vec!["a", "c", "b"]);
        let back = ledger.back().unwrap();
        assert_eq!(*ledger.key(back), "b");
    }

    #[test]
    fn test_move_to_front_of_front_is_noop() {
        let mut ledger = RecencyLedger::with_capacity(4);
        ledger.push_front("a", 1);
        let b = ledger.push_front("b", 2);

        ledger.move_to_front(b);

        assert_eq!(keys(&ledger), vec!["b", "a"]);
    }

    #[test]
    fn test_detach_back_returns_value() {
        let mut ledger = RecencyLedger::with_capacity(4);
        ledger.push_front("a", 1);
        ledger.push_front("b", 2);

        let back = ledger.back().unwrap();
        assert_eq!(ledger.detach(back), Some(1));
        assert_eq!(ledger.len(), 1);
        assert_eq!(keys(&ledger), vec!["b"]);
    }

    #[test]
    fn test_detach_middle_record() {
        let mut ledger = RecencyLedger::with_capacity(4);
        ledger.push_front("a", 1);
        let b = ledger.push_front("b", 2);
        ledger.push_front("c", 3);

        assert_eq!(ledger.detach(b), Some(2));
        assert_eq!(keys(&ledger), vec!["c", "a"]);
    }

    #[test]
    fn test_detach_only_record_empties_ledger() {
        let mut ledger = RecencyLedger::with_capacity(4);
        let a = ledger.push_front("a", 1);

        assert_eq!(ledger.detach(a), Some(1));
        assert!(ledger.is_empty());
        assert_eq!(ledger.back(), None);
    }

    #[test]
    fn test_freed_slots_are_reused() {
        let mut ledger = RecencyLedger::with_capacity(2);
        let a = ledger.push_front("a", 1);
        ledger.push_front("b", 2);

        ledger.detach(a);
        let c = ledger.push_front("c", 3);

        // slot of "a" is recycled for "c", the arena does not grow
        assert_eq!(c, a);
        assert_eq!(keys(&ledger), vec!["c", "b"]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut ledger = RecencyLedger::with_capacity(4);
        ledger.push_front("a", 1);
        ledger.push_front("b", 2);

        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.back(), None);
        assert_eq!(keys(&ledger), Vec::<&str>::new());
    }
}
