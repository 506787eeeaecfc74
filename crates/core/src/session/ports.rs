//! Port interfaces for the request engine
//!
//! These traits define the boundaries between the engine and the HTTP
//! adapters in `playdl-infra`.

use async_trait::async_trait;
use bytes::Bytes;
use playdl_common::RequestFingerprint;
use playdl_domain::{Credentials, Result, SessionToken};
use url::form_urlencoded;

/// One API call, relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<String>,
    pub content_type: Option<String>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self { path: path.into(), query, body: None, content_type: None }
    }

    /// POST with a form-encoded body. Pairs keep their given order.
    pub fn post_form(path: impl Into<String>, form: &[(&str, &str)], content_type: &str) -> Self {
        let body = form_urlencoded::Serializer::new(String::new()).extend_pairs(form).finish();
        Self {
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
            content_type: Some(content_type.to_string()),
        }
    }

    /// Requests with a body mutate server state and are never deduplicated.
    pub fn is_cacheable(&self) -> bool {
        self.body.is_none()
    }

    pub fn fingerprint(&self) -> RequestFingerprint {
        RequestFingerprint::new(&self.path, &self.query, self.body.is_some())
    }

    pub fn method(&self) -> &'static str {
        if self.body.is_some() {
            "POST"
        } else {
            "GET"
        }
    }
}

/// Trait for executing authenticated API calls
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Send `request` and return the raw response body.
    async fn execute(&self, token: &SessionToken, request: &ApiRequest) -> Result<Bytes>;
}

/// Trait for exchanging credentials for a session token
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken>;
}
