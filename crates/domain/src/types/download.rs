//! Download grant types

use serde::{Deserialize, Serialize};

/// Cookie the download host expects alongside a grant URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadCookie {
    pub name: String,
    pub value: String,
}

/// Authorization to download one package version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadGrant {
    pub url: String,
    /// Cookies in server order.
    pub cookies: Vec<DownloadCookie>,
    /// Size advertised by the server, when known.
    pub download_size: Option<i64>,
}

impl DownloadGrant {
    /// Cookies rendered as `name=value` pairs.
    pub fn cookie_pairs(&self) -> impl Iterator<Item = String> + '_ {
        self.cookies.iter().map(|cookie| format!("{}={}", cookie.name, cookie.value))
    }
}
