//! # playdl Domain
//!
//! Domain types and models for the playdl client.
//!
//! This crate contains:
//! - Session, catalog and download data types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Protocol constants (endpoints, headers, user agents)
//!
//! ## Architecture
//! - No dependencies on other playdl crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
