//! # playdl Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP adapters for the auth endpoint and the FDFE API
//! - The APK download session
//! - Configuration loading and logging setup
//! - [`PlayClient`], which wires everything together
//!
//! ## Architecture
//! - Implements traits defined in `playdl-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod client;
pub mod config;
pub mod download;
pub mod errors;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{FdfeTransport, PasswordAuthenticator};
pub use client::PlayClient;
pub use download::DownloadSession;
pub use errors::InfraError;
pub use http::HttpClient;
pub use observability::{init_tracing, LogFormat};
