//! FDFE API adapters
//!
//! Implements the core ports over HTTP: a password login against the auth
//! endpoint and an authenticated transport for API calls.
//!
//! # Architecture
//!
//! - Uses the shared [`HttpClient`](crate::http::HttpClient) (no direct reqwest clients)
//! - Requests are sent once; status and content type are checked strictly
//! - Structured tracing only, tokens are never logged

pub mod auth;
pub mod transport;

pub use auth::{parse_auth_response, PasswordAuthenticator};
pub use transport::FdfeTransport;
