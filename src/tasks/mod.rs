//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: sweeps entries older than the cache interval every interval

mod reaper;

pub use reaper::spawn_reaper_task;
