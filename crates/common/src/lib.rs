//! Common utilities shared across playdl crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: request fingerprinting
//! - `runtime`: async infrastructure (deduplicating request cache)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod fingerprint;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod cache;

// Re-export commonly used types
// ------------------------
#[cfg(feature = "runtime")]
pub use cache::{CacheConfig, CacheStats, FingerprintCache, SharedResult};
#[cfg(feature = "foundation")]
pub use fingerprint::RequestFingerprint;
