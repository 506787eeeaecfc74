//! Shared-future request cache keyed by [`RequestFingerprint`]

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::{self, BoxFuture, FutureExt, Shared};
use tracing::{debug, warn};

use super::config::CacheConfig;
use super::stats::{CacheStats, MetricsCollector};
use crate::fingerprint::RequestFingerprint;

/// A cloneable handle to a (possibly in-flight) production.
///
/// Every clone resolves to the same `Result`.
pub type SharedResult<V, E> = Shared<BoxFuture<'static, Result<V, E>>>;

struct Slot<V, E>
where
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    generation: u64,
    future: SharedResult<V, E>,
}

/// Fingerprint → shared future map with TTL expiry.
///
/// Cheap to clone; clones share the same entries and counters.
///
/// # Example
///
/// ```
/// use playdl_common::{CacheConfig, FingerprintCache, RequestFingerprint};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let cache: FingerprintCache<String, String> = FingerprintCache::new(CacheConfig::default());
/// let key = RequestFingerprint::get("details", &[("doc", "com.example")]);
///
/// let value = cache.resolve(key.clone(), || async { Ok("fresh".to_string()) }).await;
/// assert_eq!(value.as_deref(), Ok("fresh"));
/// assert!(cache.contains(&key));
/// # }
/// ```
pub struct FingerprintCache<V, E>
where
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    entries: Arc<DashMap<RequestFingerprint, Slot<V, E>>>,
    generations: Arc<AtomicU64>,
    config: CacheConfig,
    metrics: MetricsCollector,
}

impl<V, E> Clone for FingerprintCache<V, E>
where
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            generations: Arc::clone(&self.generations),
            config: self.config,
            metrics: self.metrics.clone(),
        }
    }
}

impl<V, E> fmt::Debug for FingerprintCache<V, E>
where
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FingerprintCache")
            .field("config", &self.config)
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<V, E> FingerprintCache<V, E>
where
    V: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            generations: Arc::new(AtomicU64::new(0)),
            config,
            metrics: MetricsCollector::new(),
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Return the cached future for `fingerprint`, or start `producer` and
    /// cache its future.
    ///
    /// Lookup and insertion happen under one shard lock, so concurrent
    /// callers with the same fingerprint always share a single production.
    /// A failed production is removed from the cache once it settles.
    ///
    /// `producer` is called while the shard lock is held. It must only build
    /// the future and never touch this cache synchronously.
    ///
    /// The default TTL starts at insertion, not at completion. A production
    /// still running when the TTL elapses is dropped from the map; callers
    /// already holding its future still share its result, but a later
    /// identical call starts a second production.
    ///
    /// With caching disabled, `producer` runs on every call.
    pub fn resolve<F, Fut>(&self, fingerprint: RequestFingerprint, producer: F) -> SharedResult<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>> + Send + 'static,
    {
        if !self.config.enabled {
            return producer().boxed().shared();
        }

        let (generation, future) = match self.entries.entry(fingerprint.clone()) {
            Entry::Occupied(occupied) => {
                self.metrics.record_hit();
                debug!(fingerprint = %fingerprint, "request cache hit");
                return occupied.get().future.clone();
            }
            Entry::Vacant(vacant) => {
                let generation = self.next_generation();
                let future = self
                    .evict_on_failure(fingerprint.clone(), generation, producer())
                    .boxed()
                    .shared();
                vacant.insert(Slot { generation, future: future.clone() });
                (generation, future)
            }
        };

        self.metrics.record_miss();
        debug!(fingerprint = %fingerprint, "request cache miss");
        self.schedule_expiry(fingerprint, generation, self.config.ttl);
        future
    }

    /// Insert an already-known value. Never overwrites an existing entry.
    ///
    /// Returns `true` if the value was stored. Seeded entries have no TTL
    /// until [`expire_after`](Self::expire_after) is called for them.
    pub fn seed(&self, fingerprint: RequestFingerprint, value: V) -> bool {
        if !self.config.enabled {
            return false;
        }

        match self.entries.entry(fingerprint) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                let generation = self.next_generation();
                let future = future::ready(Ok(value)).boxed().shared();
                debug!(fingerprint = %vacant.key(), "seeded request cache");
                vacant.insert(Slot { generation, future });
                self.metrics.record_seed();
                true
            }
        }
    }

    /// Schedule removal of the current entry for `fingerprint` after `ttl`.
    ///
    /// Only the entry present now is affected; if it is replaced before the
    /// timer fires, the replacement survives.
    pub fn expire_after(&self, fingerprint: &RequestFingerprint, ttl: Duration) {
        if !self.config.enabled {
            return;
        }

        let generation = self.entries.get(fingerprint).map(|slot| slot.generation);
        if let Some(generation) = generation {
            self.schedule_expiry(fingerprint.clone(), generation, ttl);
        }
    }

    /// Drop every entry. Pending timers become no-ops.
    pub fn invalidate_all(&self) {
        let removed = self.entries.len();
        self.entries.clear();
        debug!(removed, "request cache invalidated");
    }

    /// Fingerprints currently cached, sorted.
    pub fn keys(&self) -> Vec<RequestFingerprint> {
        let mut keys: Vec<_> = self.entries.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    pub fn contains(&self, fingerprint: &RequestFingerprint) -> bool {
        self.entries.contains_key(fingerprint)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.metrics.snapshot(self.entries.len())
    }

    fn next_generation(&self) -> u64 {
        self.generations.fetch_add(1, Ordering::Relaxed)
    }

    fn evict_on_failure<Fut>(
        &self,
        fingerprint: RequestFingerprint,
        generation: u64,
        production: Fut,
    ) -> impl Future<Output = Result<V, E>> + Send + 'static
    where
        Fut: Future<Output = Result<V, E>> + Send + 'static,
    {
        let entries = Arc::downgrade(&self.entries);
        let metrics = self.metrics.clone();

        async move {
            let result = production.await;
            if result.is_err() {
                let removed = entries.upgrade().and_then(|entries| {
                    entries.remove_if(&fingerprint, |_, slot| slot.generation == generation)
                });
                if removed.is_some() {
                    metrics.record_failure();
                    debug!(fingerprint = %fingerprint, "evicted failed request");
                }
            }
            result
        }
    }

    fn schedule_expiry(&self, fingerprint: RequestFingerprint, generation: u64, ttl: Duration) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            warn!(fingerprint = %fingerprint, "no tokio runtime; cache entry will not expire");
            return;
        };

        let entries = Arc::downgrade(&self.entries);
        let metrics = self.metrics.clone();

        handle.spawn(async move {
            tokio::time::sleep(ttl).await;

            let Some(entries) = entries.upgrade() else {
                return;
            };
            if entries.remove_if(&fingerprint, |_, slot| slot.generation == generation).is_some() {
                metrics.record_expiration();
                debug!(fingerprint = %fingerprint, "request cache entry expired");
            }
        });
    }
}
