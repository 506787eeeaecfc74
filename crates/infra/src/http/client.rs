use std::sync::Arc;
use std::time::Duration;

use playdl_domain::{PlayError, Result};
use reqwest::cookie::Jar;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::conversions::http_error;

/// HTTP client with timeout support and request logging.
///
/// Requests are sent exactly once; the remote service's login and purchase
/// calls are not idempotent.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a request builder using the underlying reqwest client.
    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Execute the provided request builder.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build().map_err(http_error)?;

        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, url = %redacted(&url), "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, url = %redacted(&url), status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, url = %redacted(&url), error = %err, "HTTP request failed");
                Err(http_error(err))
            }
        }
    }
}

/// URL without its query string, which may carry package names or tokens.
fn redacted(url: &reqwest::Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Option<Duration>,
    user_agent: Option<String>,
    cookies: Option<Arc<Jar>>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Some(Duration::from_secs(30)), user_agent: None, cookies: None }
    }
}

impl HttpClientBuilder {
    /// Overall request timeout. `None` disables it (long downloads).
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Send cookies from `jar` with every matching request.
    pub fn cookie_jar(mut self, jar: Arc<Jar>) -> Self {
        self.cookies = Some(jar);
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        if let Some(jar) = self.cookies {
            builder = builder.cookie_provider(jar);
        }

        let client = builder.build().map_err(http_error)?;

        Ok(HttpClient { client })
    }
}

/// Whether `response` declares exactly the `expected` content type.
///
/// Comparison ignores ASCII case and whitespace around parameters.
pub fn has_content_type(response: &Response, expected: &str) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|actual| normalize_media_type(actual) == normalize_media_type(expected))
}

/// Fail with a contract violation unless `response` has the `expected` content type.
pub fn require_content_type(response: &Response, expected: &str) -> Result<()> {
    if has_content_type(response, expected) {
        return Ok(());
    }

    let actual = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("<none>");
    Err(PlayError::contract(format!("expected content type {expected}, got {actual}")))
}

fn normalize_media_type(value: &str) -> String {
    value.split(';').map(|part| part.trim().to_ascii_lowercase()).collect::<Vec<_>>().join(";")
}
