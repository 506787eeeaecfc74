//! Domain types and models

pub mod catalog;
pub mod download;
pub mod session;

pub use catalog::{AppDetails, AppSummary, PackageDetails};
pub use download::{DownloadCookie, DownloadGrant};
pub use session::{Credentials, SessionState, SessionToken};
