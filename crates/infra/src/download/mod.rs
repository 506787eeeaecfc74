//! APK downloads authorized by a [`DownloadGrant`]
//!
//! Downloads bypass the request engine entirely: the grant URL points at a
//! separate content host that authenticates by cookie rather than by session
//! token, and responses are streamed instead of decoded.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use playdl_domain::{DownloadGrant, PlayError, Result};
use reqwest::cookie::Jar;
use reqwest::{Method, Url};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument, warn};

use crate::errors::conversions::http_error;
use crate::http::HttpClient;

/// Streams APK bodies for download grants
#[derive(Debug, Clone)]
pub struct DownloadSession {
    user_agent: String,
}

impl DownloadSession {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self { user_agent: user_agent.into() }
    }

    /// Start downloading `grant` and return the body as a byte stream.
    ///
    /// The grant's cookies are scoped to the grant URL. Any non-success
    /// status is reported as [`PlayError::Request`].
    #[instrument(skip(self, grant), fields(cookies = grant.cookies.len()))]
    pub async fn download(&self, grant: &DownloadGrant) -> Result<BoxStream<'static, Result<Bytes>>> {
        let url = Url::parse(&grant.url)
            .map_err(|err| PlayError::contract(format!("invalid download url {:?}: {err}", grant.url)))?;

        let jar = Arc::new(Jar::default());
        for cookie in grant.cookie_pairs() {
            jar.add_cookie_str(&cookie, &url);
        }

        let http = HttpClient::builder()
            .timeout(None)
            .user_agent(self.user_agent.as_str())
            .cookie_jar(jar)
            .build()?;

        let response = http.send(http.request(Method::GET, url)).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlayError::Request { status: status.as_u16(), body });
        }

        debug!(content_length = ?response.content_length(), "download started");
        Ok(response.bytes_stream().map_err(http_error).boxed())
    }

    /// Download `grant` into `path`, returning the number of bytes written.
    ///
    /// The body is streamed into a sibling `.part` file that is renamed onto
    /// `path` only after the last chunk is flushed. On failure the partial
    /// file is removed and any existing file at `path` is left untouched.
    #[instrument(skip(self, grant, path), fields(path = %path.as_ref().display()))]
    pub async fn download_to_file(&self, grant: &DownloadGrant, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let mut stream = self.download(grant).await?;

        let partial = partial_path(path);
        let written = match write_stream(&mut stream, &partial).await {
            Ok(written) => written,
            Err(err) => {
                if let Err(cleanup) = fs::remove_file(&partial).await {
                    debug!(error = %cleanup, "no partial file to remove");
                }
                warn!(error = %err, "download failed, partial file discarded");
                return Err(err);
            }
        };
        fs::rename(&partial, path).await?;

        if let Some(expected) = grant.download_size.and_then(|size| u64::try_from(size).ok()) {
            if expected != written {
                warn!(expected, written, "download size differs from advertised size");
            }
        }

        info!(bytes = written, "download complete");
        Ok(written)
    }
}

/// `<path>.part` next to `path`.
fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

async fn write_stream(stream: &mut BoxStream<'static, Result<Bytes>>, path: &Path) -> Result<u64> {
    let mut file = File::create(path).await?;

    let mut written = 0u64;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}
