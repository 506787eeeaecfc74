//! Request engine - core business logic
//!
//! Orchestrates login, transport, decoding, prefetch ingestion and the
//! request cache into the public API operations.

use std::sync::Arc;

use parking_lot::RwLock;
use playdl_common::{CacheConfig, RequestFingerprint};
use playdl_domain::constants::{DETAILS_PATH, FORM_CONTENT_TYPE, PURCHASE_PATH, RELATED_PATH};
use playdl_domain::{
    AppSummary, CacheSettings, Credentials, DownloadGrant, PackageDetails, PlayError, Result,
    SessionState, SessionToken,
};
use tracing::{debug, info, instrument};

use super::ports::{ApiRequest, ApiTransport, Authenticator};
use crate::prefetch::PrefetchIngester;
use crate::wire::{self, convert, DecodedResponse};
use crate::ResponseCache;

/// Authenticated client for the FDFE API
///
/// GET requests are deduplicated through a per-engine [`ResponseCache`]:
/// concurrent identical requests share one transport call, and responses the
/// server prefetched are served without any call at all. POST requests always
/// reach the transport.
pub struct RequestEngine {
    transport: Arc<dyn ApiTransport>,
    authenticator: Arc<dyn Authenticator>,
    cache: ResponseCache,
    ingester: PrefetchIngester,
    token: RwLock<Option<SessionToken>>,
}

impl RequestEngine {
    /// Create an unauthenticated engine with its own cache
    pub fn new(
        transport: Arc<dyn ApiTransport>,
        authenticator: Arc<dyn Authenticator>,
        settings: CacheSettings,
    ) -> Self {
        let cache = ResponseCache::new(CacheConfig { enabled: settings.enabled, ttl: settings.ttl() });
        let ingester = PrefetchIngester::new(cache.clone(), settings.ttl());
        Self { transport, authenticator, cache, ingester, token: RwLock::new(None) }
    }

    pub fn state(&self) -> SessionState {
        if self.token.read().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Unauthenticated
        }
    }

    /// Exchange credentials for a session token.
    ///
    /// An engine logs in once; calling this on an authenticated engine is a
    /// contract violation. A failed login leaves the engine unauthenticated.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        if self.token.read().is_some() {
            return Err(PlayError::contract("engine is already authenticated"));
        }

        let token = self.authenticator.login(credentials).await?;

        let mut slot = self.token.write();
        if slot.is_some() {
            return Err(PlayError::contract("engine is already authenticated"));
        }
        *slot = Some(token);
        info!("session authenticated");
        Ok(())
    }

    /// Fetch the catalog document for `package`.
    #[instrument(skip(self))]
    pub async fn package_details(&self, package: &str) -> Result<PackageDetails> {
        let response = self.get(DETAILS_PATH, vec![("doc".to_string(), package.to_string())]).await?;
        let doc = response
            .details_doc()
            .ok_or_else(|| PlayError::contract(format!("details response for {package} has no document")))?;
        Ok(convert::package_details(doc))
    }

    /// Fetch apps related to `package`, in server order.
    #[instrument(skip(self))]
    pub async fn related_apps(&self, package: &str) -> Result<Vec<AppSummary>> {
        let query = vec![
            ("doc".to_string(), package.to_string()),
            ("rt".to_string(), "1".to_string()),
            ("c".to_string(), "3".to_string()),
        ];
        let response = self.get(RELATED_PATH, query).await?;
        let docs = response
            .list_docs()
            .ok_or_else(|| PlayError::contract(format!("related response for {package} has no list")))?;
        Ok(convert::list_entries(docs))
    }

    /// Request a download grant for one version of `package`. Never cached.
    #[instrument(skip(self))]
    pub async fn download_grant(&self, package: &str, version_code: i32) -> Result<DownloadGrant> {
        let version_code = version_code.to_string();
        let request = ApiRequest::post_form(
            PURCHASE_PATH,
            &[("ot", "1"), ("doc", package), ("vc", version_code.as_str())],
            FORM_CONTENT_TYPE,
        );

        let response = self.execute(request).await?;
        let data = response
            .delivery_data()
            .ok_or_else(|| PlayError::contract(format!("purchase response for {package} has no delivery data")))?;
        convert::download_grant(data)
    }

    /// Request a download grant for the currently published version of `package`.
    #[instrument(skip(self))]
    pub async fn latest_download_grant(&self, package: &str) -> Result<DownloadGrant> {
        let details = self.package_details(package).await?;
        let version_code = details
            .version_code()
            .ok_or_else(|| PlayError::contract(format!("{package} is not an app document")))?;
        self.download_grant(package, version_code).await
    }

    /// Drop every cached and prefetched response.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }

    pub fn cached_keys(&self) -> Vec<RequestFingerprint> {
        self.cache.keys()
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    async fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<Arc<DecodedResponse>> {
        self.execute(ApiRequest::get(path, query)).await
    }

    async fn execute(&self, request: ApiRequest) -> Result<Arc<DecodedResponse>> {
        let token = self.session_token()?;
        let transport = Arc::clone(&self.transport);
        let ingester = self.ingester.clone();

        if !request.is_cacheable() {
            return fetch(transport, ingester, token, request).await;
        }

        let fingerprint = request.fingerprint();
        self.cache.resolve(fingerprint, move || fetch(transport, ingester, token, request)).await
    }

    fn session_token(&self) -> Result<SessionToken> {
        self.token
            .read()
            .clone()
            .ok_or_else(|| PlayError::contract("not authenticated; call login first"))
    }
}

/// Transport call, decode and prefetch ingestion for one request.
async fn fetch(
    transport: Arc<dyn ApiTransport>,
    ingester: PrefetchIngester,
    token: SessionToken,
    request: ApiRequest,
) -> Result<Arc<DecodedResponse>> {
    debug!(method = request.method(), path = %request.path, "sending api request");
    let body = transport.execute(&token, &request).await?;
    let response = wire::decode(&body)?;

    let seeded = ingester.ingest(&response);
    if seeded > 0 {
        debug!(path = %request.path, seeded, "ingested prefetched responses");
    }

    Ok(Arc::new(response))
}
