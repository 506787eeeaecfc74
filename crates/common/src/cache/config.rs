//! Cache configuration

use std::time::Duration;

/// Default time-to-live for entries created by a cache miss.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30);

/// Configuration for [`FingerprintCache`](super::FingerprintCache) behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// When false every request goes to the producer and nothing is stored
    pub enabled: bool,

    /// Lifetime of entries created by a cache miss
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true, ttl: DEFAULT_TTL }
    }
}

impl CacheConfig {
    /// Quick preset for an enabled cache with the given TTL
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    ///
    /// use playdl_common::cache::CacheConfig;
    ///
    /// let config = CacheConfig::ttl(Duration::from_secs(5));
    /// assert!(config.enabled);
    /// ```
    pub fn ttl(ttl: Duration) -> Self {
        Self { enabled: true, ttl }
    }

    /// Quick preset for a pass-through cache
    pub fn disabled() -> Self {
        Self { enabled: false, ..Self::default() }
    }
}
