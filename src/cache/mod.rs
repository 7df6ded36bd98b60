//! Cache Module
//!
//! Provides in-memory byte caching with interval-based background expiration.

mod entry;
mod stats;
mod store;
mod timed;


use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use timed::TimedCache;

/// Locks `mutex`, recovering the guard if a previous holder panicked.
///
/// Every critical section leaves the store consistent, so poisoning carries no information.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
