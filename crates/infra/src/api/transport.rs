//! Authenticated transport for FDFE API calls

use async_trait::async_trait;
use bytes::Bytes;
use playdl_core::{ApiRequest, ApiTransport};
use playdl_domain::constants::{
    API_CONTENT_TYPE, CLIENT_ID, ENABLED_EXPERIMENTS, FILTER_LEVEL, SMALLEST_SCREEN_WIDTH_DP,
    UNSUPPORTED_EXPERIMENTS,
};
use playdl_domain::{DeviceConfig, PlayError, Result, SessionToken};
use reqwest::header::{ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, StatusCode};
use tracing::{instrument, warn};

use crate::errors::conversions::http_error;
use crate::http::client::require_content_type;
use crate::http::HttpClient;

/// Sends API requests with the device headers the service expects
#[derive(Debug, Clone)]
pub struct FdfeTransport {
    http: HttpClient,
    base_url: String,
    device: DeviceConfig,
    device_id: String,
}

impl FdfeTransport {
    pub fn new(
        http: HttpClient,
        base_url: impl Into<String>,
        device: DeviceConfig,
        device_id: impl Into<String>,
    ) -> Self {
        Self { http, base_url: base_url.into(), device, device_id: device_id.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[async_trait]
impl ApiTransport for FdfeTransport {
    #[instrument(skip(self, token, request), fields(method = request.method(), path = %request.path))]
    async fn execute(&self, token: &SessionToken, request: &ApiRequest) -> Result<Bytes> {
        let method = if request.body.is_some() { Method::POST } else { Method::GET };

        let mut builder = self
            .http
            .request(method, self.url(&request.path))
            .header(ACCEPT_LANGUAGE, self.device.language.replace('_', "-"))
            .header(AUTHORIZATION, token.authorization_header())
            .header("X-DFE-Device-Id", &self.device_id)
            .header("X-DFE-Client-Id", CLIENT_ID)
            .header(USER_AGENT, &self.device.user_agent)
            .header("X-DFE-Enabled-Experiments", ENABLED_EXPERIMENTS)
            .header("X-DFE-Unsupported-Experiments", UNSUPPORTED_EXPERIMENTS)
            .header("X-DFE-SmallestScreenWidthDp", SMALLEST_SCREEN_WIDTH_DP)
            .header("X-DFE-Filter-Level", FILTER_LEVEL);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
            if let Some(content_type) = &request.content_type {
                builder = builder.header(CONTENT_TYPE, content_type);
            }
        }

        let response = self.http.send(builder).await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "api request rejected");
            return Err(PlayError::Request { status: status.as_u16(), body });
        }

        require_content_type(&response, API_CONTENT_TYPE)?;
        response.bytes().await.map_err(http_error)
    }
}
