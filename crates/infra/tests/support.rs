//! Shared fixtures for `playdl-infra` integration tests.

#![allow(dead_code)]

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use playdl_core::wire::messages::{
    AndroidAppDeliveryData, AppDetails, BuyResponse, DetailsResponse, DocV2, DocumentDetails,
    HttpCookie, ListResponse, Payload, PreFetch, PurchaseStatusResponse, ResponseWrapper,
};
use playdl_domain::{AccountConfig, CacheSettings, Config, DeviceConfig, EndpointConfig};
use prost::Message;
use wiremock::{MockServer, ResponseTemplate};

pub const USERNAME: &str = "user@example.com";
pub const PASSWORD: &str = "hunter2";
pub const ANDROID_ID: &str = "3f1a2b3c4d5e6f70";
pub const TEST_USER_AGENT: &str = "Android-Finsky/test";

/// Config pointing every endpoint at `server`.
pub fn config_for(server: &MockServer) -> Config {
    Config {
        account: AccountConfig {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
            android_id: ANDROID_ID.to_string(),
        },
        device: DeviceConfig { user_agent: TEST_USER_AGENT.to_string(), ..DeviceConfig::default() },
        endpoints: EndpointConfig {
            auth_url: format!("{}/auth", server.uri()),
            api_base_url: format!("{}/fdfe", server.uri()),
        },
        cache: CacheSettings::default(),
    }
}

/// Successful login response carrying `token`.
pub fn auth_ok(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_raw(format!("SID=sid\nLSID=lsid\nAuth={token}\n"), "text/plain; charset=utf-8")
}

/// API response with the gzip-framed `envelope`.
pub fn api_ok(envelope: Vec<u8>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(gzip(&envelope), "application/x-gzip")
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes).unwrap();
    encoder.finish().unwrap()
}

pub fn doc(docid: &str) -> DocV2 {
    DocV2 {
        docid: Some(docid.to_string()),
        title: Some(format!("{docid} title")),
        creator: Some("Example Inc".to_string()),
        ..Default::default()
    }
}

pub fn details_envelope(package: &str, version_code: i32, pre_fetch: Vec<PreFetch>) -> Vec<u8> {
    let mut document = doc(package);
    document.details = Some(DocumentDetails {
        app_details: Some(AppDetails {
            package_name: Some(package.to_string()),
            version_code: Some(version_code),
            ..Default::default()
        }),
    });

    ResponseWrapper {
        payload: Some(Payload {
            details_response: Some(DetailsResponse { doc_v2: Some(document) }),
            ..Default::default()
        }),
        pre_fetch,
    }
    .encode_to_vec()
}

pub fn list_envelope(entries: &[&str]) -> Vec<u8> {
    ResponseWrapper {
        payload: Some(Payload {
            list_response: Some(ListResponse { doc: entries.iter().map(|id| doc(id)).collect() }),
            ..Default::default()
        }),
        pre_fetch: Vec::new(),
    }
    .encode_to_vec()
}

pub fn buy_envelope(url: &str, cookie: (&str, &str), download_size: i64) -> Vec<u8> {
    ResponseWrapper {
        payload: Some(Payload {
            buy_response: Some(BuyResponse {
                purchase_status_response: Some(PurchaseStatusResponse {
                    status: Some(1),
                    app_delivery_data: Some(AndroidAppDeliveryData {
                        download_size: Some(download_size),
                        download_url: Some(url.to_string()),
                        download_auth_cookie: vec![HttpCookie {
                            name: Some(cookie.0.to_string()),
                            value: Some(cookie.1.to_string()),
                        }],
                    }),
                }),
            }),
            ..Default::default()
        }),
        pre_fetch: Vec::new(),
    }
    .encode_to_vec()
}

pub fn prefetch(url: &str, response: Vec<u8>) -> PreFetch {
    PreFetch { url: Some(url.to_string()), response: Some(response), ..Default::default() }
}
