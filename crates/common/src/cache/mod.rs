//! Deduplicating request cache
//!
//! [`FingerprintCache`] maps a [`RequestFingerprint`](crate::RequestFingerprint)
//! to a shared, possibly still running, production of the response. Concurrent
//! callers with the same fingerprint await the same future, so each logical
//! request reaches the network at most once per TTL window.
//!
//! # Lifecycle
//!
//! - A miss stores the in-flight future and schedules removal after the
//!   configured TTL.
//! - A failed production removes its own entry so the next caller retries.
//! - Seeded entries (already-known values) are stored as completed futures
//!   and never overwrite an existing entry.
//! - Every entry carries a generation number. Timers and failure cleanup
//!   only remove the entry they were created for, never a newer one.

pub mod config;
pub mod shared;
pub mod stats;

pub use config::{CacheConfig, DEFAULT_TTL};
pub use shared::{FingerprintCache, SharedResult};
pub use stats::CacheStats;
