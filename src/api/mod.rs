//! API Module
//!
//! HTTP handlers and routing for the demo server in front of a `TimedCache`.
//!
//! # Endpoints
//! - `PUT /add/:key` - Store the raw request body under a key
//! - `GET /get/:key` - Retrieve the raw bytes stored under a key
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
