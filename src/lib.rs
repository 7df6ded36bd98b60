//! Timed Cache - A thread-safe in-memory byte cache
//!
//! Entries expire one interval after insertion, removed by a background reaper task.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::TimedCache;
pub use config::Config;
pub use error::CacheError;
