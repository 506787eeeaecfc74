//! HTTP plumbing shared by the API adapters and the download session

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
