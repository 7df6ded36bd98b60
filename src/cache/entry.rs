//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A stored value together with the instant it was inserted.
///
/// Entries are never mutated; re-inserting a key replaces the whole entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: Vec<u8>,
    /// Insertion instant
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates a new entry with an explicit creation instant.
    pub fn with_created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Is Stale ==
    /// Checks whether a sweep at `now` with the given interval removes this entry.
    ///
    /// An entry is stale when it was created strictly before `now - interval`.
    /// If `now - interval` is not representable nothing is old enough to be stale.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        match now.checked_sub(interval) {
            Some(cutoff) => self.created_at < cutoff,
            None => false,
        }
    }
}
