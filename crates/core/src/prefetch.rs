//! Prefetch ingestion
//!
//! The server may bundle responses for URLs it expects the client to request
//! next. Each bundled response is seeded into the request cache under the
//! fingerprint the matching GET would produce.

use std::sync::Arc;
use std::time::Duration;

use playdl_common::RequestFingerprint;
use tracing::debug;
use url::form_urlencoded;

use crate::wire::DecodedResponse;
use crate::ResponseCache;

const API_PREFIX: &str = "fdfe/";

/// Seeds prefetched responses into a [`ResponseCache`]
#[derive(Debug, Clone)]
pub struct PrefetchIngester {
    cache: ResponseCache,
    ttl: Duration,
}

impl PrefetchIngester {
    pub fn new(cache: ResponseCache, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Seed every prefetch entry of `response`. Returns how many were inserted.
    ///
    /// Existing entries are left alone, including their expiry timers.
    pub fn ingest(&self, response: &DecodedResponse) -> usize {
        let mut seeded = 0;

        for entry in &response.prefetch {
            let Some(fingerprint) = prefetch_fingerprint(&entry.url) else {
                debug!(url = %entry.url, "ignoring prefetch url without query");
                continue;
            };

            if self.cache.seed(fingerprint.clone(), Arc::clone(&entry.response)) {
                self.cache.expire_after(&fingerprint, self.ttl);
                debug!(fingerprint = %fingerprint, "seeded prefetched response");
                seeded += 1;
            }
        }

        seeded
    }
}

/// GET fingerprint for a prefetch URL, or `None` if it carries no query.
pub fn prefetch_fingerprint(url: &str) -> Option<RequestFingerprint> {
    let (path, query) = url.split_once('?')?;
    let query: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes()).into_owned().collect();
    Some(RequestFingerprint::get(api_path(path), &query))
}

/// Reduce an absolute or rooted URL path to the path relative to the API base.
fn api_path(path: &str) -> &str {
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("", |slash| &rest[slash..]),
        None => path,
    };
    let path = path.trim_start_matches('/');
    path.strip_prefix(API_PREFIX).unwrap_or(path)
}
