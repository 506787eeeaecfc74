//! # playdl Core
//!
//! Request engine for the Play store FDFE API - no HTTP dependencies.
//!
//! This crate contains:
//! - Port interfaces for authentication and transport (traits)
//! - The response envelope codec
//! - Prefetch ingestion into the request cache
//! - The [`RequestEngine`] service
//!
//! ## Architecture Principles
//! - Only depends on `playdl-common` and `playdl-domain`
//! - No network or filesystem code
//! - All external dependencies via traits

use std::sync::Arc;

use playdl_common::FingerprintCache;
use playdl_domain::PlayError;

pub mod prefetch;
pub mod session;
pub mod wire;

/// Request cache holding decoded responses
pub type ResponseCache = FingerprintCache<Arc<wire::DecodedResponse>, PlayError>;

pub use prefetch::PrefetchIngester;
pub use session::ports::{ApiRequest, ApiTransport, Authenticator};
pub use session::RequestEngine;
pub use wire::{decode, DecodedResponse, PrefetchEntry};
