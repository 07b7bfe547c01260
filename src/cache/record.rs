//! Cache Record Module
//!
//! Defines the ledger node that owns one key/value pair and its
//! neighbour links in the recency order.

// == Slot Handles ==
/// Stable arena index identifying one record in the recency ledger.
pub(crate) type Slot = usize;

/// Sentinel slot meaning "no record" (end of a chain, or an empty list).
pub(crate) const NIL: Slot = Slot::MAX;

// == Cache Record ==
/// A single key/value unit occupying one position in the recency ledger.
///
/// The value is held as `Option<V>` so a detach can move it out of the
/// arena without cloning; a freed slot keeps its stale key until reuse.
#[derive(Debug)]
pub(crate) struct Record<K, V> {
    /// The stored key (a second copy lives in the index)
    pub key: K,
    /// The stored value, `None` once the slot has been freed
    pub value: Option<V>,
    /// Slot of the more recently used neighbour
    pub prev: Slot,
    /// Slot of the less recently used neighbour
    pub next: Slot,
}

impl<K, V> Record<K, V> {
    // == Constructor ==
    /// Creates a new, unlinked record.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value: Some(value),
            prev: NIL,
            next: NIL,
        }
    }
}
