//! Configuration Module
//!
//! Loads the demo server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Reaper interval in seconds; entries older than this are swept
    pub reap_interval: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REAP_INTERVAL` - Reaper interval in seconds (default: 5)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            reap_interval: env::var("REAP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.reap_interval),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }

    /// Reaper interval as a `Duration`.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reap_interval: 5,
            server_port: 3000,
        }
    }
}
