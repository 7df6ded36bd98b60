//! API Handlers
//!
//! HTTP request handlers for each demo server endpoint.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{AddResponse, HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// `TimedCache` does its own locking, so handlers share it behind a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<TimedCache>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: TimedCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Must be called inside a tokio runtime, which drives the cache's reaper.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = TimedCache::new(config.interval())?;
        Ok(Self::new(cache))
    }
}

/// Handler for PUT /add/:key
///
/// Stores the raw request body under `key`, replacing any previous value.
pub async fn add_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Json<AddResponse> {
    let size = body.len();
    state.cache.add(key.clone(), body.to_vec());

    Json(AddResponse::new(key, size))
}

/// Handler for GET /get/:key
///
/// Returns the stored bytes as `application/octet-stream`.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse> {
    let value = state
        .cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(key))?;

    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], value))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats();
    Json(StatsResponse::new(
        &stats,
        state.cache.interval().as_secs_f64(),
    ))
}

/// Handler for GET /health
///
/// Reports "degraded" once the reaper has stopped.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(!state.cache.is_closed()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_state() -> AppState {
        AppState::new(TimedCache::new(Duration::from_secs(300)).unwrap())
    }

    #[tokio::test]
    async fn test_add_and_get_handler() {
        let state = test_state();

        let response = add_handler(
            State(state.clone()),
            Path("test_key".to_string()),
            Bytes::from_static(b"test_value"),
        )
        .await;
        assert_eq!(response.key, "test_key");
        assert_eq!(response.size, 10);

        assert_eq!(state.cache.get("test_key"), Some(b"test_value".to_vec()));

        let result = get_handler(State(state), Path("test_key".to_string())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_handler_missing_key() {
        let state = test_state();

        let result = get_handler(State(state), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();
        state.cache.add("k", b"v".to_vec());
        state.cache.get("k");
        state.cache.get("missing");

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.total_entries, 1);
        assert_eq!(response.interval_secs, 300.0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = test_state();

        let response = health_handler(State(state.clone())).await;
        assert_eq!(response.status, "healthy");

        state.cache.close();
        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "degraded");
    }
}
