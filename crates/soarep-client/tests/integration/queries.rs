//! Integration tests for successful resource queries.

use serde_json::json;
use soarep_client::{Params, ResourceKind, Shape};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{mount_get, start};

#[tokio::test]
async fn test_team_query_returns_object() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/team/services",
        ResponseTemplate::new(200).set_body_json(json!({
            "teamId": "services",
            "teamName": "Services",
            "serviceRefs": []
        })),
    )
    .await;

    let result = registry.team().query_default().await.unwrap();

    let team = result.as_object().expect("Team is object-shaped");
    assert_eq!(team["teamName"], json!("Services"));
}

#[tokio::test]
async fn test_tree_query_returns_array() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/tree",
        ResponseTemplate::new(200).set_body_json(json!([
            {"label": "Platform", "children": []},
            {"label": "Payments", "children": []}
        ])),
    )
    .await;

    let result = registry.tree().query_default().await.unwrap();

    let nodes = result.as_array().expect("Tree is array-shaped");
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0]["label"], json!("Platform"));
    assert_eq!(nodes[1]["label"], json!("Payments"));
}

#[tokio::test]
async fn test_every_resource_hits_its_default_url() {
    let (server, registry) = start().await;
    let routes = [
        (ResourceKind::Tree, "/v1/tree"),
        (ResourceKind::Team, "/v1/team/services"),
        (ResourceKind::Service, "/v1/service/services"),
        (ResourceKind::ServiceNotUses, "/v1/service/services/notuses"),
        (ResourceKind::DataStore, "/v1/datastore/services"),
        (ResourceKind::Portal, "/v1/portal"),
        (ResourceKind::Graph, "/v1/graph"),
        (ResourceKind::Config, "/v1/config"),
        (ResourceKind::User, "/v1/users"),
    ];

    for (kind, route) in routes {
        let shape = kind.descriptor().query().unwrap().shape;
        let body = match shape {
            Shape::Array => json!([]),
            Shape::Object => json!({}),
        };
        mount_get(&server, route, ResponseTemplate::new(200).set_body_json(body)).await;
    }

    for (kind, _) in routes {
        let result = registry.get(kind).query_default().await.unwrap();
        assert_eq!(result.shape(), kind.descriptor().query().unwrap().shape);
        assert!(result.is_empty());
    }
}

#[tokio::test]
async fn test_placeholder_override() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/service/billing/notuses",
        ResponseTemplate::new(200).set_body_json(json!({"services": ["ledger"]})),
    )
    .await;

    let result = registry
        .service_not_uses()
        .query(&Params::new().with("serviceId", "billing"))
        .await
        .unwrap();

    assert_eq!(result.as_object().unwrap()["services"], json!(["ledger"]));
}

#[tokio::test]
async fn test_extra_params_are_sent_as_query_string() {
    let (server, registry) = start().await;
    Mock::given(method("GET"))
        .and(path("/v1/portal"))
        .and(query_param("env", "prod"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"name": "ops"}])))
        .expect(1)
        .mount(&server)
        .await;

    let result = registry
        .portal()
        .query(&Params::new().with("env", "prod"))
        .await
        .unwrap();

    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn test_single_element_array_stays_array() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/portal",
        ResponseTemplate::new(200).set_body_json(json!([{"name": "only"}])),
    )
    .await;

    let result = registry.portal().query_default().await.unwrap();

    assert_eq!(result.shape(), Shape::Array);
    assert_eq!(result.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_resource_lookup_by_name() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/datastore/services",
        ResponseTemplate::new(200).set_body_json(json!({"dataStores": []})),
    )
    .await;

    let result = registry
        .resource("data-store")
        .unwrap()
        .query_default()
        .await
        .unwrap();

    assert!(result.as_object().unwrap().contains_key("dataStores"));
}

#[tokio::test]
async fn test_concurrent_queries_are_independent() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/graph",
        ResponseTemplate::new(200).set_body_json(json!({"nodes": []})),
    )
    .await;
    mount_get(
        &server,
        "/v1/users",
        ResponseTemplate::new(200).set_body_json(json!({"users": []})),
    )
    .await;

    let graph = registry.graph();
    let users = registry.user();
    let (graph, users) = tokio::join!(graph.query_default(), users.query_default());

    assert!(graph.unwrap().as_object().unwrap().contains_key("nodes"));
    assert!(users.unwrap().as_object().unwrap().contains_key("users"));
}
