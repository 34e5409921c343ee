use std::hash::{Hash, Hasher};

use fnv::FnvHasher;

/// Fixed-capacity map from position keys to cached search results.
///
/// Each key hashes to exactly one slot and storing into an occupied slot
/// evicts the resident entry, so memory stays bounded for the life of the
/// table. Probes verify full key equality, never just the hash.
pub struct TranspositionTable<K, V> {
    entries: Vec<Option<(K, V)>>,
    occupied: usize,
}

impl<K: Hash + Eq, V> TranspositionTable<K, V> {
    /// `capacity` is rounded up to the next power of two.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1).next_power_of_two();
        let mut entries = Vec::new();
        entries.resize_with(capacity, || None);

        Self {
            entries,
            occupied: 0,
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        match &self.entries[self.slot(key)] {
            Some((resident, value)) if resident == key => Some(value),
            _ => None,
        }
    }

    pub fn store(&mut self, key: K, value: V) {
        let slot = self.slot(&key);
        let entry = &mut self.entries[slot];

        if entry.is_none() {
            self.occupied += 1;
        }

        *entry = Some((key, value));
    }

    pub fn len(&self) -> usize {
        self.occupied
    }

    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn slot(&self, key: &K) -> usize {
        let mut hasher = FnvHasher::default();
        key.hash(&mut hasher);
        hasher.finish() as usize & (self.entries.len() - 1)
    }
}
