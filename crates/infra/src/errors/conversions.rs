//! Conversions from external infrastructure errors into domain errors.

use playdl_domain::PlayError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PlayError);

impl From<InfraError> for PlayError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PlayError> for InfraError {
    fn from(value: PlayError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPlayError {
    fn into_play(self) -> PlayError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PlayError */
/* -------------------------------------------------------------------------- */

impl IntoPlayError for HttpError {
    fn into_play(self) -> PlayError {
        if self.is_timeout() {
            return PlayError::Network("HTTP request timed out".into());
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return PlayError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return PlayError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return PlayError::Request {
                status: status.as_u16(),
                body: status.canonical_reason().unwrap_or("unknown status").to_string(),
            };
        }

        if self.is_decode() || self.is_body() {
            return PlayError::Network(format!("failed to read HTTP body: {self}"));
        }

        PlayError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_play())
    }
}

/// Shorthand for the two-step reqwest → domain conversion.
pub fn http_error(err: HttpError) -> PlayError {
    InfraError::from(err).into()
}
