//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`tracing_layer`]: request/response tracing with `TraceLayer`.
//! - [`metrics`]: Prometheus request metrics.
//!
//! Authentication lives in [`crate::auth`].

pub mod metrics;
pub mod tracing_layer;
