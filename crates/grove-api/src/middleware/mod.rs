//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`metrics`]: in-process request/error counters.
//!
//! Request/response tracing is handled by `tower_http::trace::TraceLayer`
//! wired in `lib.rs`.

pub mod metrics;
