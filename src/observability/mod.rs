//! Observability subsystem
//!
//! Diagnostics go through `tracing`. Request/response logging comes from
//! `tower_http`'s `TraceLayer`; store mutations log at `debug`.

mod logger;

pub use logger::{default_directive, init as init_logging, LogFormat};
