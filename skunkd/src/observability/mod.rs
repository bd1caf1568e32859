//! Observability module
//!
//! Structured logging to stderr. User-facing results go to stdout and are
//! never routed through `tracing`.

pub mod logging;

pub use logging::{LogFormat, init_logging};
