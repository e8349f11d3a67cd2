//! Client tests against a mock backend.

use payloads::{ApiClient, ApiConfig, ClientError};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig {
        base_url: server.uri(),
    })
}

#[tokio::test]
async fn health_check_parses_status_and_service() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "service": "dashboard-api"
        })))
        .mount(&server)
        .await;

    let health = client_for(&server).health_check().await.unwrap();
    assert!(health.is_ok());
    assert_eq!(health.service, "dashboard-api");
}

#[tokio::test]
async fn usage_summary_parses_totals_and_bands() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usage/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "used": 55.2,
            "limit": 100.0,
            "percentage": 55.2,
            "reported_time": "2024-01-10 08:30",
            "daytime": {
                "used": 40.0, "limit": 60.0, "remaining": 20.0,
                "percentage": 66.7
            },
            "nighttime": {
                "used": 15.2, "limit": 40.0, "remaining": 24.8,
                "percentage": 38.0
            }
        })))
        .mount(&server)
        .await;

    let usage = client_for(&server).usage_summary().await.unwrap();
    assert_eq!(usage.used, 55.2);
    assert_eq!(usage.daytime.unwrap().remaining, 20.0);
    assert_eq!(usage.reported_time.as_deref(), Some("2024-01-10 08:30"));
}

#[tokio::test]
async fn server_error_surfaces_the_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/usage/summary"))
        .respond_with(
            ResponseTemplate::new(500).set_body_string("upstream timeout"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).usage_summary().await.unwrap_err();
    assert!(matches!(err, ClientError::Api(..)));
    let message = err.to_string();
    assert!(message.contains("500"), "message was: {message}");
    assert!(message.contains("upstream timeout"));
}

#[tokio::test]
async fn unpaid_bill_deserializes_with_status_intact() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bills/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "unpaid",
            "amount": 1500.5,
            "due_date": "2024-01-15",
            "raw_data": {"bill_code": "B"}
        })))
        .mount(&server)
        .await;

    let bill = client_for(&server).bill_status().await.unwrap();
    assert_eq!(bill.status, "unpaid");
    assert!(bill.is_unpaid());
    assert_eq!(bill.amount, Some(1500.5));
    assert_eq!(bill.due_date.as_deref(), Some("2024-01-15"));
}

#[tokio::test]
async fn vas_bundles_parse_optional_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vas/bundles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "bundles": [
                {
                    "name": "Extra GB 10",
                    "used": "3.4GB",
                    "expiry_date": "2024-02-01",
                    "description": null,
                    "raw_data": {}
                },
                {
                    "name": "Night Booster",
                    "used": null,
                    "expiry_date": null,
                    "description": "Unlimited 12AM-8AM",
                    "raw_data": {"vas_id": 7}
                }
            ]
        })))
        .mount(&server)
        .await;

    let vas = client_for(&server).vas_bundles().await.unwrap();
    assert_eq!(vas.bundles.len(), 2);
    assert_eq!(vas.bundles[0].used.as_deref(), Some("3.4GB"));
    assert!(vas.bundles[1].expiry_date.is_none());
    assert_eq!(vas.bundles[1].raw_data["vas_id"], 7);
}

#[tokio::test]
async fn extra_gb_is_an_opaque_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vas/extra-gb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "package_name": "Extra GB",
            "balance": "2.1"
        })))
        .mount(&server)
        .await;

    let extra = client_for(&server).extra_gb().await.unwrap();
    assert_eq!(extra["package_name"], "Extra GB");
}

#[tokio::test]
async fn malformed_body_on_success_status_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profile/info"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).profile_info().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Take a port from a server we immediately shut down, so nothing is
    // listening on it. The builder gives a non-pooled server, which actually
    // stops listening on drop (pooled servers from `start()` keep the port).
    let server = MockServer::builder().start().await;
    let base_url = server.uri();
    drop(server);

    let client = ApiClient::new(ApiConfig { base_url });
    let err = client.health_check().await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.to_string().contains("Network error"));
}
