use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::entry::CacheEntry;

/// Bounded in-process tier with insertion-order eviction.
///
/// When full, the key inserted earliest is evicted, regardless of how
/// recently it was read. Re-inserting an existing key replaces its value
/// without changing its position.
#[derive(Debug)]
pub(crate) struct MemoryTier {
    capacity: usize,
    entries: HashMap<String, Arc<CacheEntry>>,
    order: VecDeque<String>,
}

impl MemoryTier {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.min(1024)),
            order: VecDeque::with_capacity(capacity.min(1024)),
        }
    }

    pub(crate) fn get(&self, hash: &str) -> Option<Arc<CacheEntry>> {
        self.entries.get(hash).cloned()
    }

    /// Insert an entry, returning the key evicted to make room, if any.
    pub(crate) fn insert(&mut self, hash: String, entry: Arc<CacheEntry>) -> Option<String> {
        if self.capacity == 0 {
            return None;
        }
        if let Some(slot) = self.entries.get_mut(&hash) {
            *slot = entry;
            return None;
        }

        let mut evicted = None;
        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                evicted = Some(oldest);
            }
        }

        self.order.push_back(hash.clone());
        self.entries.insert(hash, entry);
        evicted
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }
}
