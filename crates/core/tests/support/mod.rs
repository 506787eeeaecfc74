//! Shared test helpers for `playdl-core` integration tests.
//!
//! Provides an in-memory transport keyed by request path, a fixed-outcome
//! authenticator, and builders for encoded response envelopes.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::Mutex;
use playdl_core::wire::messages::{
    AndroidAppDeliveryData, AppDetails, BuyResponse, DetailsResponse, DocV2, DocumentDetails,
    HttpCookie, ListResponse, Payload, PreFetch, PurchaseStatusResponse, ResponseWrapper,
};
use playdl_core::{ApiRequest, ApiTransport, Authenticator, RequestEngine};
use playdl_domain::{CacheSettings, Credentials, PlayError, Result, SessionToken};
use prost::Message;

pub const TOKEN: &str = "test-token";

/// Transport that answers from canned bodies and records every request
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<HashMap<String, Vec<u8>>>,
    requests: Mutex<Vec<ApiRequest>>,
    delay: Duration,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response so concurrent callers overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn respond(&self, path: &str, body: Vec<u8>) {
        self.responses.lock().insert(path.to_string(), body);
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ApiTransport for MockTransport {
    async fn execute(&self, token: &SessionToken, request: &ApiRequest) -> Result<Bytes> {
        self.requests.lock().push(request.clone());
        if token.as_str() != TOKEN {
            return Err(PlayError::Request { status: 401, body: "bad token".to_string() });
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let body = self.responses.lock().get(&request.path).cloned();
        body.map(Bytes::from).ok_or_else(|| PlayError::Request {
            status: 404,
            body: format!("no stub for {}", request.path),
        })
    }
}

/// Authenticator with a fixed outcome
pub struct StaticAuthenticator(pub Result<SessionToken>);

impl StaticAuthenticator {
    pub fn ok() -> Self {
        Self(Ok(SessionToken::new(TOKEN)))
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn login(&self, _credentials: &Credentials) -> Result<SessionToken> {
        self.0.clone()
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("user@example.com", "secret", "3f1a2b3c4d5e6f70")
}

/// Logged-in engine over `transport`.
pub async fn engine_with(transport: Arc<MockTransport>, settings: CacheSettings) -> RequestEngine {
    let engine = RequestEngine::new(transport, Arc::new(StaticAuthenticator::ok()), settings);
    engine.login(&credentials()).await.unwrap();
    engine
}

pub fn doc(docid: &str) -> DocV2 {
    DocV2 {
        docid: Some(docid.to_string()),
        title: Some(format!("{docid} title")),
        creator: Some("Example Inc".to_string()),
        details_url: Some(format!("details?doc={docid}")),
        ..Default::default()
    }
}

pub fn prefetch(url: &str, response: Vec<u8>) -> PreFetch {
    PreFetch {
        url: Some(url.to_string()),
        response: Some(response),
        ttl: Some(30_000),
        ..Default::default()
    }
}

pub fn details_envelope(package: &str, version_code: i32, pre_fetch: Vec<PreFetch>) -> Vec<u8> {
    let mut document = doc(package);
    document.details = Some(DocumentDetails {
        app_details: Some(AppDetails {
            package_name: Some(package.to_string()),
            version_code: Some(version_code),
            version_string: Some(format!("1.{version_code}")),
            ..Default::default()
        }),
    });

    ResponseWrapper {
        payload: Some(Payload {
            details_response: Some(DetailsResponse { doc_v2: Some(document) }),
            ..Default::default()
        }),
        pre_fetch,
    }
    .encode_to_vec()
}

/// List payload with one top-level document per entry.
pub fn list_envelope(entries: &[&str]) -> Vec<u8> {
    ResponseWrapper {
        payload: Some(Payload {
            list_response: Some(ListResponse { doc: entries.iter().map(|id| doc(id)).collect() }),
            ..Default::default()
        }),
        pre_fetch: Vec::new(),
    }
    .encode_to_vec()
}

/// List payload whose documents each carry the given child documents.
pub fn nested_list_envelope(entries: &[(&str, &[&str])]) -> Vec<u8> {
    let docs = entries
        .iter()
        .map(|(id, children)| {
            let mut entry = doc(id);
            entry.child = children.iter().map(|child| doc(child)).collect();
            entry
        })
        .collect();

    ResponseWrapper {
        payload: Some(Payload { list_response: Some(ListResponse { doc: docs }), ..Default::default() }),
        pre_fetch: Vec::new(),
    }
    .encode_to_vec()
}

pub fn buy_envelope(url: &str, cookies: &[(&str, &str)]) -> Vec<u8> {
    let delivery = AndroidAppDeliveryData {
        download_size: Some(2048),
        download_url: Some(url.to_string()),
        download_auth_cookie: cookies
            .iter()
            .map(|(name, value)| HttpCookie {
                name: Some((*name).to_string()),
                value: Some((*value).to_string()),
            })
            .collect(),
    };

    ResponseWrapper {
        payload: Some(Payload {
            buy_response: Some(BuyResponse {
                purchase_status_response: Some(PurchaseStatusResponse {
                    status: Some(1),
                    app_delivery_data: Some(delivery),
                }),
            }),
            ..Default::default()
        }),
        pre_fetch: Vec::new(),
    }
    .encode_to_vec()
}
