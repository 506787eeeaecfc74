//! End-to-end tests for [`PlayClient`] against a stubbed service.

#[path = "support.rs"]
mod support;

use playdl_domain::{CacheSettings, SessionState};
use playdl_infra::PlayClient;
use support::{
    api_ok, auth_ok, buy_envelope, config_for, details_envelope, list_envelope, prefetch,
};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PACKAGE: &str = "com.example.app";
const APK: &[u8] = b"apk bytes";

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(auth_ok("XYZ"))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_prefetched_related_apps_are_served_from_cache() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let related = prefetch(
        &format!("rec?doc={PACKAGE}&rt=1&c=3"),
        list_envelope(&["com.other.one", "com.other.two"]),
    );
    Mock::given(method("GET"))
        .and(path("/fdfe/details"))
        .and(query_param("doc", PACKAGE))
        .respond_with(api_ok(details_envelope(PACKAGE, 42, vec![related])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/fdfe/rec"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let client = PlayClient::from_config(&config_for(&server)).unwrap();
    client.login().await.unwrap();
    assert_eq!(client.engine().state(), SessionState::Authenticated);

    let details = client.engine().package_details(PACKAGE).await.unwrap();
    assert_eq!(details.version_code(), Some(42));

    let apps = client.engine().related_apps(PACKAGE).await.unwrap();
    let ids: Vec<_> = apps.iter().map(|app| app.docid.as_str()).collect();
    assert_eq!(ids, vec!["com.other.one", "com.other.two"]);

    // A repeated details call is deduplicated as well.
    client.engine().package_details(PACKAGE).await.unwrap();
}

#[tokio::test]
async fn test_download_latest_fetches_grant_and_writes_apk() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path("/fdfe/details"))
        .respond_with(api_ok(details_envelope(PACKAGE, 42, Vec::new())))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/fdfe/purchase"))
        .and(body_string_contains("vc=42"))
        .respond_with(api_ok(buy_envelope(
            &format!("{}/dl/app.apk", server.uri()),
            ("MarketDA", "cookie-value"),
            APK.len() as i64,
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dl/app.apk"))
        .and(header("cookie", "MarketDA=cookie-value"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(APK))
        .expect(1)
        .mount(&server)
        .await;

    let client = PlayClient::from_config(&config_for(&server)).unwrap();
    client.login().await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("app.apk");
    let written = client.download_latest(PACKAGE, &target).await.unwrap();

    assert_eq!(written, APK.len() as u64);
    assert_eq!(std::fs::read(&target).unwrap(), APK);
}

#[tokio::test]
async fn test_disabled_cache_sends_every_request() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/fdfe/details"))
        .respond_with(api_ok(details_envelope(PACKAGE, 1, Vec::new())))
        .expect(2)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.cache = CacheSettings { enabled: false, ..CacheSettings::default() };
    let client = PlayClient::from_config(&config).unwrap();
    client.login().await.unwrap();

    client.engine().package_details(PACKAGE).await.unwrap();
    client.engine().package_details(PACKAGE).await.unwrap();

    assert!(client.engine().cached_keys().is_empty());
}
