//! Integration tests for typed decoding with `query_as`.

use serde::Deserialize;
use serde_json::json;
use soarep_client::Params;
use wiremock::ResponseTemplate;

use crate::common::{mount_get, start};

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Team {
    team_id: String,
    team_name: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct PortalLink {
    name: String,
    url: String,
}

#[tokio::test]
async fn test_query_as_object() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/team/platform",
        ResponseTemplate::new(200).set_body_json(json!({
            "teamId": "platform",
            "teamName": "Platform Engineering"
        })),
    )
    .await;

    let team: Team = registry
        .team()
        .query_as(&Params::new().with("teamId", "platform"))
        .await
        .unwrap();

    assert_eq!(
        team,
        Team {
            team_id: "platform".to_string(),
            team_name: "Platform Engineering".to_string(),
        }
    );
}

#[tokio::test]
async fn test_query_as_array() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/portal",
        ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Grafana", "url": "https://grafana.internal"},
            {"name": "Kibana", "url": "https://kibana.internal"}
        ])),
    )
    .await;

    let links: Vec<PortalLink> = registry.portal().query_as(&Params::new()).await.unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[1].name, "Kibana");
}

#[tokio::test]
async fn test_query_as_still_checks_shape() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/portal",
        ResponseTemplate::new(200).set_body_json(json!({"name": "x", "url": "y"})),
    )
    .await;

    let err = registry
        .portal()
        .query_as::<Vec<PortalLink>>(&Params::new())
        .await
        .unwrap_err();

    assert!(err.is_decode_error());
}

#[tokio::test]
async fn test_query_as_type_mismatch_is_decode_error() {
    let (server, registry) = start().await;
    mount_get(
        &server,
        "/v1/team/services",
        ResponseTemplate::new(200).set_body_json(json!({"teamId": 7})),
    )
    .await;

    let err = registry
        .team()
        .query_as::<Team>(&Params::new())
        .await
        .unwrap_err();

    assert!(err.is_decode_error());
}
