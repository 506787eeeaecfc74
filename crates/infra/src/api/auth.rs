//! Password login against the auth endpoint

use std::collections::HashMap;

use async_trait::async_trait;
use playdl_core::Authenticator;
use playdl_domain::constants::{
    AUTH_ACCOUNT_TYPE, AUTH_APP, AUTH_CONTENT_TYPE, AUTH_SERVICE, AUTH_SOURCE, AUTH_TOKEN_KEY,
};
use playdl_domain::{Credentials, DeviceConfig, PlayError, Result, SessionToken};
use reqwest::{Method, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::http::client::require_content_type;
use crate::http::HttpClient;

/// Exchanges account credentials for a session token
#[derive(Debug, Clone)]
pub struct PasswordAuthenticator {
    http: HttpClient,
    auth_url: String,
    device: DeviceConfig,
}

impl PasswordAuthenticator {
    pub fn new(http: HttpClient, auth_url: impl Into<String>, device: DeviceConfig) -> Self {
        Self { http, auth_url: auth_url.into(), device }
    }
}

#[async_trait]
impl Authenticator for PasswordAuthenticator {
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken> {
        let sdk_version = self.device.sdk_version.to_string();
        let form = [
            ("Email", credentials.username.as_str()),
            ("Passwd", credentials.password.as_str()),
            ("service", AUTH_SERVICE),
            ("accountType", AUTH_ACCOUNT_TYPE),
            ("has_permission", "1"),
            ("source", AUTH_SOURCE),
            ("androidId", credentials.device_id.as_str()),
            ("app", AUTH_APP),
            ("device_country", self.device.country.as_str()),
            ("operatorCountry", self.device.country.as_str()),
            ("lang", self.device.language_code()),
            ("sdk_version", sdk_version.as_str()),
        ];

        let request = self.http.request(Method::POST, &self.auth_url).form(&form);
        let response = self.http.send(request).await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "login rejected");
            return Err(PlayError::Login { body });
        }

        require_content_type(&response, AUTH_CONTENT_TYPE)?;
        let body = response
            .text()
            .await
            .map_err(|err| PlayError::Network(format!("failed to read login response: {err}")))?;

        let token = parse_auth_response(&body)
            .remove(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| PlayError::Login { body })?;

        info!("login succeeded");
        debug!(token_len = token.len(), "received session token");
        Ok(SessionToken::new(token))
    }
}

/// Parse a `KEY=value` per line login response.
///
/// Keys are lowercased. Values are split at the first `=`, so they may
/// contain `=` themselves. Lines without `=` are ignored.
pub fn parse_auth_response(body: &str) -> HashMap<String, String> {
    body.lines()
        .filter_map(|line| line.trim_end_matches('\r').split_once('='))
        .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_case_insensitive() {
        let parsed = parse_auth_response("SID=abc\nLSID=def\nAuth=XYZ\n");
        assert_eq!(parsed.get("auth").map(String::as_str), Some("XYZ"));
        assert_eq!(parsed.get("sid").map(String::as_str), Some("abc"));
    }

    #[test]
    fn values_split_at_first_equals() {
        let parsed = parse_auth_response("Auth=abc==\r\nExpiry=0");
        assert_eq!(parsed.get("auth").map(String::as_str), Some("abc=="));
        assert_eq!(parsed.get("expiry").map(String::as_str), Some("0"));
    }

    #[test]
    fn lines_without_separator_are_ignored() {
        let parsed = parse_auth_response("garbage\n\nservices=hist,mail");
        assert_eq!(parsed.len(), 1);
        assert!(!parsed.contains_key("auth"));
    }
}
