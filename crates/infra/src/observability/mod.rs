//! Observability setup
//!
//! Library code only emits `tracing` events; binaries and tests decide where
//! they go by calling [`init_tracing`].

pub mod logging;

pub use logging::{init_tracing, LogFormat, DEFAULT_FILTER};
