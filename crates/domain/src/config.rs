//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_AUTH_URL, DEFAULT_CACHE_TTL_MS, DEFAULT_DOWNLOAD_USER_AGENT,
    DEFAULT_USER_AGENT,
};

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub account: AccountConfig,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub cache: CacheSettings,
}

/// Account credentials
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccountConfig {
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Hex Android device id (GSF id) registered for the account.
    pub android_id: String,
}

/// Device profile reported to the service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Locale for `Accept-Language`, e.g. `en_US`.
    pub language: String,
    /// Two-letter country code for the auth form.
    pub country: String,
    pub sdk_version: u32,
    pub user_agent: String,
    pub download_user_agent: String,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            language: "en_US".to_string(),
            country: "us".to_string(),
            sdk_version: 16,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            download_user_agent: DEFAULT_DOWNLOAD_USER_AGENT.to_string(),
        }
    }
}

impl DeviceConfig {
    /// Language part of the locale (`en_US` → `en`).
    pub fn language_code(&self) -> &str {
        self.language.split(['_', '-']).next().unwrap_or(&self.language)
    }
}

/// Remote endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub auth_url: String,
    /// Base for API paths, without trailing slash.
    pub api_base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Request cache settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub enabled: bool,
    pub ttl_ms: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { enabled: true, ttl_ms: DEFAULT_CACHE_TTL_MS }
    }
}

impl CacheSettings {
    pub fn ttl(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.ttl_ms)
    }
}
