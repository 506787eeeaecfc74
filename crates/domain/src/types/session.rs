//! Session types
//!
//! A session starts unauthenticated and becomes authenticated once a login
//! exchange yields a [`SessionToken`]. Tokens live only in memory.

use std::fmt;

use crate::impl_domain_status_conversions;

/// Short-lived credential returned by the auth endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for API requests.
    pub fn authorization_header(&self) -> String {
        format!("GoogleLogin auth={}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Login input
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub device_id: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        device_id: impl Into<String>,
    ) -> Self {
        Self { username: username.into(), password: password.into(), device_id: device_id.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("device_id", &self.device_id)
            .finish()
    }
}

/// Authentication state of a request engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

impl_domain_status_conversions!(SessionState {
    Unauthenticated => "unauthenticated",
    Authenticated => "authenticated",
});
