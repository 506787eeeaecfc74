//! Protocol constants
//!
//! Fixed values the remote service expects on every request. Anything a
//! deployment may want to change lives in [`crate::config`] instead.

// Endpoints
pub const DEFAULT_AUTH_URL: &str = "https://android.clients.google.com/auth";
pub const DEFAULT_API_BASE_URL: &str = "https://android.clients.google.com/fdfe";

// Cache
pub const DEFAULT_CACHE_TTL_MS: u64 = 30_000;

// Auth form
pub const AUTH_SERVICE: &str = "androidmarket";
pub const AUTH_ACCOUNT_TYPE: &str = "HOSTED_OR_GOOGLE";
pub const AUTH_SOURCE: &str = "android";
pub const AUTH_APP: &str = "com.android.vending";
pub const AUTH_TOKEN_KEY: &str = "auth";

// Request headers
pub const CLIENT_ID: &str = "am-android-google";
pub const ENABLED_EXPERIMENTS: &str = "cl:billing.select_add_instrument_by_default";
pub const UNSUPPORTED_EXPERIMENTS: &str = "nocache:billing.use_charging_poller,market_emails,\
buyer_currency,prod_baseline,checkin.set_asset_paid_app_field,shekel_test,content_ratings,\
buyer_currency_in_app,nocache:encrypted_apk,recent_changes";
pub const SMALLEST_SCREEN_WIDTH_DP: &str = "320";
pub const FILTER_LEVEL: &str = "3";
pub const DEFAULT_USER_AGENT: &str = "Android-Finsky/3.7.13 (api=3,versionCode=8013013,sdk=22,\
device=crespo,hardware=herring,product=soju)";
pub const DEFAULT_DOWNLOAD_USER_AGENT: &str =
    "AndroidDownloadManager/4.1.1 (Linux; U; Android 4.1.1; Nexus S Build/JRO03E)";

// Content types
pub const AUTH_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub const API_CONTENT_TYPE: &str = "application/x-gzip";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

// API paths
pub const DETAILS_PATH: &str = "details";
pub const RELATED_PATH: &str = "rec";
pub const PURCHASE_PATH: &str = "purchase";
