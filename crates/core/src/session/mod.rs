//! Authenticated request session

pub mod engine;
pub mod ports;

pub use engine::RequestEngine;
