//! Timed Cache Module
//!
//! Thread-safe cache handle: one mutex over the whole store plus a background
//! reaper task that sweeps stale entries every interval.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::{lock, CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper_task;

// == Timed Cache ==
/// Concurrency-safe byte cache whose entries are reaped one interval after insertion.
///
/// Lookups never check freshness: an entry stays visible until the reaper's
/// next sweep removes it, so it may outlive its interval by up to one tick.
///
/// # Example
/// ```ignore
/// let cache = TimedCache::new(Duration::from_secs(5))?;
/// cache.add("https://example.com", b"testdata".to_vec());
/// assert_eq!(cache.get("https://example.com"), Some(b"testdata".to_vec()));
/// ```
#[derive(Debug)]
pub struct TimedCache {
    store: Arc<Mutex<CacheStore>>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current tokio runtime.
    ///
    /// The first sweep runs one `interval` after construction.
    ///
    /// # Errors
    /// - `CacheError::InvalidInterval` if `interval` is zero
    /// - `CacheError::IntervalTooLarge` if the first two ticks cannot be
    ///   represented as instants (e.g. `Duration::MAX`)
    /// - `CacheError::RuntimeUnavailable` if called outside a tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval);
        }
        let first_tick = Instant::now()
            .checked_add(interval)
            .filter(|tick| tick.checked_add(interval).is_some())
            .ok_or(CacheError::IntervalTooLarge)?;
        let runtime = Handle::try_current().map_err(|_| CacheError::RuntimeUnavailable)?;

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let reaper = spawn_reaper_task(&runtime, Arc::downgrade(&store), first_tick, interval);

        Ok(Self {
            store,
            reaper: Mutex::new(Some(reaper)),
        })
    }

    // == Add ==
    /// Inserts or replaces the value stored under `key`, stamping it with the current instant.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        debug!(key = %key, "cache add");
        lock(&self.store).insert(key, value.into());
    }

    // == Get ==
    /// Returns the value stored under `key`, or `None` if absent.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = lock(&self.store).get(key);
        debug!(key = %key, hit = value.is_some(), "cache get");
        value
    }

    // == Sweep ==
    /// Runs one sweep as if the reaper ticked at `now`.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_at(&self, now: Instant) -> usize {
        lock(&self.store).sweep(now)
    }

    // == Close ==
    /// Stops the background reaper. Idempotent.
    ///
    /// The cache stays usable afterwards but entries no longer expire.
    pub fn close(&self) {
        if let Some(handle) = lock(&self.reaper).take() {
            handle.abort();
            info!("Reaper stopped");
        }
    }

    /// Returns true once the reaper is no longer running.
    pub fn is_closed(&self) -> bool {
        lock(&self.reaper)
            .as_ref()
            .map_or(true, |handle| handle.is_finished())
    }

    pub fn stats(&self) -> CacheStats {
        lock(&self.store).stats()
    }

    pub fn interval(&self) -> Duration {
        lock(&self.store).interval()
    }

    pub fn len(&self) -> usize {
        lock(&self.store).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.store).is_empty()
    }
}

impl Drop for TimedCache {
    fn drop(&mut self) {
        self.close();
    }
}
