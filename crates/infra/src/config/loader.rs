//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PLAYDL_USERNAME`: Account email (required)
//! - `PLAYDL_PASSWORD`: Account password (required)
//! - `PLAYDL_ANDROID_ID`: Registered device id (required)
//! - `PLAYDL_LANG`: Locale, e.g. `en_US`
//! - `PLAYDL_COUNTRY`: Two-letter country code
//! - `PLAYDL_CACHE_ENABLED`: Whether the request cache is enabled (true/false)
//! - `PLAYDL_CACHE_TTL_MS`: Request cache TTL in milliseconds
//! - `PLAYDL_AUTH_URL`: Auth endpoint override
//! - `PLAYDL_API_BASE_URL`: API base URL override
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./playdl.json` or `./playdl.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `$XDG_CONFIG_HOME/playdl/config.{json,toml}` or `~/.config/playdl/config.{json,toml}`
//!
//! A file may leave `account.password` empty; `PLAYDL_PASSWORD` then fills it.

use std::path::{Path, PathBuf};

use playdl_domain::{
    AccountConfig, CacheSettings, Config, DeviceConfig, EndpointConfig, PlayError, Result,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `PlayError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `PlayError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let account = AccountConfig {
        username: env_var("PLAYDL_USERNAME")?,
        password: env_var("PLAYDL_PASSWORD")?,
        android_id: env_var("PLAYDL_ANDROID_ID")?,
    };

    let defaults = DeviceConfig::default();
    let device = DeviceConfig {
        language: env_opt("PLAYDL_LANG").unwrap_or(defaults.language),
        country: env_opt("PLAYDL_COUNTRY").unwrap_or(defaults.country),
        ..defaults
    };

    let defaults = EndpointConfig::default();
    let endpoints = EndpointConfig {
        auth_url: env_opt("PLAYDL_AUTH_URL").unwrap_or(defaults.auth_url),
        api_base_url: env_opt("PLAYDL_API_BASE_URL").unwrap_or(defaults.api_base_url),
    };

    let defaults = CacheSettings::default();
    let ttl_ms = match env_opt("PLAYDL_CACHE_TTL_MS") {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| PlayError::Config(format!("Invalid cache TTL: {}", e)))?,
        None => defaults.ttl_ms,
    };
    let cache = CacheSettings { enabled: env_bool("PLAYDL_CACHE_ENABLED", defaults.enabled)?, ttl_ms };

    let config = Config { account, device, endpoints, cache };
    validate(&config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `PlayError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(PlayError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            PlayError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| PlayError::Config(format!("Failed to read config file: {}", e)))?;

    let mut config = parse_config(&contents, &config_path)?;
    if config.account.password.is_empty() {
        if let Some(password) = env_opt("PLAYDL_PASSWORD") {
            config.account.password = password;
        }
    }

    validate(&config)?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| PlayError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| PlayError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(PlayError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn validate(config: &Config) -> Result<()> {
    let account = &config.account;
    for (name, value) in [
        ("account.username", &account.username),
        ("account.password", &account.password),
        ("account.android_id", &account.android_id),
    ] {
        if value.trim().is_empty() {
            return Err(PlayError::Config(format!("{name} must not be empty")));
        }
    }

    if config.cache.enabled && config.cache.ttl_ms == 0 {
        return Err(PlayError::Config("cache.ttl_ms must be positive when the cache is enabled".into()));
    }

    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("playdl.json"),
            cwd.join("playdl.toml"),
            cwd.join("config.json"),
            cwd.join("config.toml"),
        ]);
    }

    let config_home = env_opt("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env_opt("HOME").map(|home| PathBuf::from(home).join(".config")));
    if let Some(dir) = config_home {
        let dir = dir.join("playdl");
        candidates.extend(vec![dir.join("config.json"), dir.join("config.toml")]);
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `PlayError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| PlayError::Config(format!("Missing required environment variable: {}", key)))
}

/// Optional environment variable; empty values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Unset or empty yields `default`; anything else is a config error.
fn env_bool(key: &str, default: bool) -> Result<bool> {
    let Some(raw) = env_opt(key) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PlayError::Config(format!("Invalid boolean for {key}: {raw}"))),
    }
}
