//! Common test utilities for soarep-client integration tests.

use soarep_client::{ClientConfig, ResourceRegistry};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Starts a mock server and a registry pointed at it.
pub async fn start() -> (MockServer, ResourceRegistry) {
    let server = MockServer::start().await;
    let registry = registry_for(&server);
    (server, registry)
}

/// Builds a registry whose base URL is the mock server.
pub fn registry_for(server: &MockServer) -> ResourceRegistry {
    let config = ClientConfig {
        base_url: server.uri(),
        timeout_secs: 5,
        ..ClientConfig::default()
    };
    ResourceRegistry::from_config(&config).expect("registry should build")
}

/// Mounts a GET handler for `route` that answers once with `response`.
pub async fn mount_get(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
