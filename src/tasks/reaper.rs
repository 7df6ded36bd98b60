//! Reaper Task
//!
//! Background task that periodically sweeps stale entries out of a cache store.

use std::sync::{Mutex, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{lock, CacheStore};

/// Spawns the reaper for `store` on `runtime`.
///
/// The first sweep happens at `first_tick` and then every `interval` after
/// that; the caller checks that these instants are representable. Each sweep holds the store lock for a full scan and
/// removes entries created strictly before `now - interval`.
///
/// The task holds only a weak reference and exits on its own once the store
/// is dropped; [`crate::cache::TimedCache`] also aborts it on close.
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it.
pub fn spawn_reaper_task(
    runtime: &Handle,
    store: Weak<Mutex<CacheStore>>,
    first_tick: Instant,
    interval: Duration,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        info!("Starting reaper with interval of {:?}", interval);

        let mut ticker = time::interval_at(first_tick, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let Some(shared) = store.upgrade() else {
                debug!("Cache dropped, reaper exiting");
                break;
            };

            let removed = lock(&shared).sweep(Instant::now());

            if removed > 0 {
                info!("Reaper sweep: removed {} expired entries", removed);
            } else {
                debug!("Reaper sweep: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const INTERVAL: Duration = Duration::from_secs(5);

    fn shared_store() -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new(INTERVAL)))
    }

    fn spawn(store: &Arc<Mutex<CacheStore>>) -> JoinHandle<()> {
        spawn_reaper_task(
            &Handle::current(),
            Arc::downgrade(store),
            Instant::now() + INTERVAL,
            INTERVAL,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_expired_entries() {
        let store = shared_store();
        lock(&store).insert("expire_soon".to_string(), b"value".to_vec());

        let handle = spawn(&store);

        time::sleep(Duration::from_secs(11)).await;

        assert_eq!(lock(&store).get("expire_soon"), None);
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_preserves_fresh_entries() {
        let store = shared_store();
        let handle = spawn(&store);

        // Inserted at +3s, so the +5s tick (cutoff 0s) must keep it
        time::sleep(Duration::from_secs(3)).await;
        lock(&store).insert("fresh".to_string(), b"value".to_vec());

        time::sleep(Duration::from_secs(6)).await;
        assert_eq!(lock(&store).get("fresh"), Some(b"value".to_vec()));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_exits_when_store_dropped() {
        let store = shared_store();
        let handle = spawn(&store);

        drop(store);
        time::sleep(Duration::from_secs(6)).await;

        assert!(handle.is_finished(), "Reaper should exit once the store is gone");
    }

    #[tokio::test]
    async fn test_reaper_can_be_aborted() {
        let store = shared_store();
        let handle = spawn(&store);

        handle.abort();

        time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
