//! Integration tests for failure propagation.

use std::time::Duration;

use serde_json::json;
use soarep_client::{ClientConfig, Error, ResourceRegistry};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{mount_get, start};

#[tokio::test]
async fn test_server_error_is_request_failed() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/graph",
        ResponseTemplate::new(500).set_body_string("graph rebuild in progress"),
    )
    .await;

    let err = registry.graph().query_default().await.unwrap_err();

    assert_eq!(err.http_status(), Some(500));
    let Error::RequestFailed { body, url, .. } = err else {
        unreachable!("Expected RequestFailed error variant");
    };
    assert_eq!(body, "graph rebuild in progress");
    assert!(url.ends_with("/v1/graph"));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/config",
        ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
    )
    .await;

    let err = registry.config().query_default().await.unwrap_err();

    assert!(err.is_decode_error());
    assert_eq!(err.http_status(), None);
}

#[tokio::test]
async fn test_array_for_object_resource_is_decode_error() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/users",
        ResponseTemplate::new(200).set_body_json(json!([{"username": "alice"}])),
    )
    .await;

    let err = registry.user().query_default().await.unwrap_err();

    assert!(err.is_decode_error());
    assert!(err.to_string().contains("expected JSON object"));
}

#[tokio::test]
async fn test_object_for_array_resource_is_decode_error() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/tree",
        ResponseTemplate::new(200).set_body_json(json!({"label": "root"})),
    )
    .await;

    let err = registry.tree().query_default().await.unwrap_err();

    assert!(err.is_decode_error());
}

#[tokio::test]
async fn test_client_error_status_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/team/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let registry = crate::common::registry_for(&server);

    let err = registry
        .team()
        .query(&soarep_client::Params::new().with("teamId", "ghost"))
        .await
        .unwrap_err();

    assert_eq!(err.http_status(), Some(404));
}

#[tokio::test]
async fn test_timeout_is_request_failed_without_status() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/v1/portal",
        ResponseTemplate::new(200)
            .set_body_json(json!([]))
            .set_delay(Duration::from_secs(3)),
    )
    .await;
    let config = ClientConfig {
        base_url: server.uri(),
        timeout_secs: 1,
        ..ClientConfig::default()
    };
    let registry = ResourceRegistry::from_config(&config).unwrap();

    let err = registry.portal().query_default().await.unwrap_err();

    assert!(err.is_request_failed());
    assert_eq!(err.http_status(), None);
}

#[tokio::test]
async fn test_unreachable_server_is_request_failed() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    let config = ClientConfig {
        base_url: format!("http://127.0.0.1:{port}"),
        ..ClientConfig::default()
    };
    let registry = ResourceRegistry::from_config(&config).unwrap();

    let err = registry.tree().query_default().await.unwrap_err();

    assert!(err.is_request_failed());
    assert_eq!(err.http_status(), None);
}
