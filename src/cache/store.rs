//! Cache Store Module
//!
//! Unsynchronized key-value storage with interval-based sweeping. The
//! thread-safe handle in [`crate::cache::TimedCache`] wraps it in a mutex.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-value storage for byte values with a single expiry interval.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Entries created strictly before `now - interval` are swept
    interval: Duration,
    /// Lookup and sweep statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose sweeps use the given interval.
    pub fn new(interval: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            interval,
            stats: CacheStats::new(),
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and resetting its age.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.insert_entry(key, CacheEntry::new(value));
    }

    /// Stores a value with an explicit creation instant.
    #[cfg(test)]
    pub(crate) fn insert_at(&mut self, key: String, value: Vec<u8>, created_at: Instant) {
        self.insert_entry(key, CacheEntry::with_created_at(value, created_at));
    }

    fn insert_entry(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// No freshness check happens here; an entry stays readable until a sweep removes it.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry created strictly before `now - interval`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let interval = self.interval;
        self.entries
            .retain(|_, entry| !entry.is_stale(now, interval));

        let removed = before - self.entries.len();
        self.stats.record_expired(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
