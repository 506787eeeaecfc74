//! Error types used throughout the client

use thiserror::Error;

/// Main error type for playdl
///
/// Errors are `Clone` because a single in-flight request may be awaited by
/// several deduplicated callers, each of which receives its own copy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// Auth endpoint rejected the credentials or returned no token.
    #[error("Login failed: {body}")]
    Login { body: String },

    /// API endpoint answered with a non-200 status.
    #[error("Request failed with HTTP {status}: {body}")]
    Request { status: u16, body: String },

    /// Response envelope could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Caller misuse or an unexpected response shape.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl PlayError {
    /// Shorthand for [`PlayError::ContractViolation`].
    pub fn contract(message: impl Into<String>) -> Self {
        Self::ContractViolation(message.into())
    }

    /// Stable label suitable for structured logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::Request { .. } => "request",
            Self::Decode(_) => "decode",
            Self::ContractViolation(_) => "contract_violation",
            Self::Network(_) => "network",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

impl From<std::io::Error> for PlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for playdl operations
pub type Result<T> = std::result::Result<T, PlayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_error_carries_raw_body() {
        let err = PlayError::Login { body: "Error=BadAuthentication".to_string() };
        assert_eq!(err.to_string(), "Login failed: Error=BadAuthentication");
        assert_eq!(err.label(), "login");
    }

    #[test]
    fn request_error_reports_status() {
        let err = PlayError::Request { status: 404, body: "missing".to_string() };
        assert!(err.to_string().contains("404"));
        assert_eq!(err.label(), "request");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PlayError = io.into();
        assert!(matches!(err, PlayError::Io(msg) if msg.contains("gone")));
    }
}
