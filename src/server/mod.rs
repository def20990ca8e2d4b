//! HTTP server
//!
//! - [`router`] - Maps requests to the API handlers (no sockets involved)
//! - [`http`] - `tiny_http` listener, worker threads and access logging
//! - [`rate_limit`] - Token bucket shared by all workers
//! - [`shutdown`] - Run until Ctrl+C / SIGTERM, then stop the workers

pub mod http;
pub mod rate_limit;
pub mod router;
pub mod shutdown;

pub use http::{REQUEST_ID_HEADER, ServerHandle, start};
pub use rate_limit::RateLimiter;
pub use router::{AppState, MAX_BODY_BYTES, Reply, route};
pub use shutdown::{run_until, shutdown_signal};
