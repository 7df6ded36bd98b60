//! Response models for the demo HTTP server
//!
//! Lookups return raw bytes; these DTOs cover the JSON-bodied endpoints.

pub mod responses;

// Re-export commonly used types
pub use responses::{AddResponse, ErrorResponse, HealthResponse, StatsResponse};
