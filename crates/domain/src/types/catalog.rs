//! Catalog views of decoded API payloads

use serde::{Deserialize, Serialize};

/// Document returned by the `details` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDetails {
    pub docid: String,
    pub title: String,
    pub creator: String,
    pub description_html: String,
    pub details_url: Option<String>,
    /// Present for application documents.
    pub app: Option<AppDetails>,
}

impl PackageDetails {
    /// Version code of the currently published build, if the document is an app.
    pub fn version_code(&self) -> Option<i32> {
        self.app.as_ref().map(|app| app.version_code)
    }
}

/// Application-specific section of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppDetails {
    pub package_name: String,
    pub version_code: i32,
    pub version_string: String,
    pub developer_name: String,
    pub upload_date: String,
    pub installation_size: i64,
    pub num_downloads: String,
    pub permissions: Vec<String>,
}

/// Entry of a list payload (e.g. related apps)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSummary {
    pub docid: String,
    pub title: String,
    pub creator: String,
    pub details_url: Option<String>,
}
