//! Client composition root
//!
//! Wires the HTTP adapters into a [`RequestEngine`] from a [`Config`].

use std::path::Path;
use std::sync::Arc;

use playdl_core::RequestEngine;
use playdl_domain::{Config, Credentials, DownloadGrant, Result};
use tracing::instrument;

use crate::api::{FdfeTransport, PasswordAuthenticator};
use crate::download::DownloadSession;
use crate::http::HttpClient;

/// Fully wired client for one account
pub struct PlayClient {
    engine: RequestEngine,
    downloads: DownloadSession,
    credentials: Credentials,
}

impl PlayClient {
    /// Build an unauthenticated client. No network traffic happens here.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::builder().build()?;

        let authenticator = PasswordAuthenticator::new(
            http.clone(),
            &config.endpoints.auth_url,
            config.device.clone(),
        );
        let transport = FdfeTransport::new(
            http,
            &config.endpoints.api_base_url,
            config.device.clone(),
            &config.account.android_id,
        );

        Ok(Self {
            engine: RequestEngine::new(Arc::new(transport), Arc::new(authenticator), config.cache),
            downloads: DownloadSession::new(&config.device.download_user_agent),
            credentials: Credentials::new(
                &config.account.username,
                &config.account.password,
                &config.account.android_id,
            ),
        })
    }

    /// Log in with the configured account.
    pub async fn login(&self) -> Result<()> {
        self.engine.login(&self.credentials).await
    }

    pub fn engine(&self) -> &RequestEngine {
        &self.engine
    }

    pub fn downloads(&self) -> &DownloadSession {
        &self.downloads
    }

    /// Download `grant` into `path`.
    pub async fn download(&self, grant: &DownloadGrant, path: impl AsRef<Path>) -> Result<u64> {
        self.downloads.download_to_file(grant, path).await
    }

    /// Fetch a grant for the published version of `package` and download it
    /// into `path`.
    #[instrument(skip(self, path))]
    pub async fn download_latest(&self, package: &str, path: impl AsRef<Path>) -> Result<u64> {
        let grant = self.engine.latest_download_grant(package).await?;
        self.download(&grant, path).await
    }
}
