//! Projections from wire messages to domain types

use playdl_domain::{
    AppDetails as AppDetailsView, AppSummary, DownloadCookie, DownloadGrant, PackageDetails,
    PlayError, Result,
};

use super::messages::{AndroidAppDeliveryData, AppDetails, DocV2};

pub fn package_details(doc: &DocV2) -> PackageDetails {
    PackageDetails {
        docid: doc.docid().to_string(),
        title: doc.title().to_string(),
        creator: doc.creator().to_string(),
        description_html: doc.description_html().to_string(),
        details_url: doc.details_url.clone(),
        app: doc.details.as_ref().and_then(|details| details.app_details.as_ref()).map(app_details),
    }
}

fn app_details(app: &AppDetails) -> AppDetailsView {
    AppDetailsView {
        package_name: app.package_name().to_string(),
        version_code: app.version_code(),
        version_string: app.version_string().to_string(),
        developer_name: app.developer_name().to_string(),
        upload_date: app.upload_date().to_string(),
        installation_size: app.installation_size(),
        num_downloads: app.num_downloads().to_string(),
        permissions: app.permission.clone(),
    }
}

pub fn app_summary(doc: &DocV2) -> AppSummary {
    AppSummary {
        docid: doc.docid().to_string(),
        title: doc.title().to_string(),
        creator: doc.creator().to_string(),
        details_url: doc.details_url.clone(),
    }
}

/// Entries of a list payload, one per top-level document in server order.
///
/// Child documents are not unwrapped.
pub fn list_entries(docs: &[DocV2]) -> Vec<AppSummary> {
    docs.iter().map(app_summary).collect()
}

/// Build a download grant from purchase delivery data.
///
/// A grant without a download URL is useless to the caller and is reported
/// as a contract violation.
pub fn download_grant(data: &AndroidAppDeliveryData) -> Result<DownloadGrant> {
    let url = data
        .download_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| PlayError::contract("delivery data has no download url"))?;

    let cookies = data
        .download_auth_cookie
        .iter()
        .map(|cookie| DownloadCookie {
            name: cookie.name().to_string(),
            value: cookie.value().to_string(),
        })
        .collect();

    Ok(DownloadGrant { url: url.to_string(), cookies, download_size: data.download_size })
}
