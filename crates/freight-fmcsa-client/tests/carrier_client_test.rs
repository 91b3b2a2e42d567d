//! Contract tests for FmcsaClient against the QCMobile carrier lookup.
//!
//! These tests use wiremock to simulate the registry. Every response shape
//! mirrors what `GET /carriers/{id}?webKey=...` returns in production.
//!
//! | Registry behavior        | Test |
//! |--------------------------|------|
//! | 200 with carrier record  | `lookup_*_found` |
//! | 200 with empty content   | `lookup_*_no_content` / `*_no_carrier_detail` |
//! | 404                      | `lookup_returns_not_found_on_404` |
//! | 401                      | `lookup_maps_401_to_unauthorized` |
//! | other non-2xx            | `lookup_maps_500_to_api_error_*` |
//! | slow / unreachable       | `lookup_times_out`, `lookup_reports_unreachable`, `transport_errors_never_expose_web_key` |

use std::time::Duration;

use freight_core::McNumber;
use freight_fmcsa_client::{CarrierLookup, FmcsaClient, FmcsaConfig, FmcsaError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zeroize::Zeroizing;

/// Build a client pointed at a wiremock server.
fn test_client(mock_server: &MockServer) -> FmcsaClient {
    let config = FmcsaConfig {
        base_url: mock_server.uri().parse().unwrap(),
        web_key: Some(Zeroizing::new("test-web-key".into())),
        timeout_secs: 5,
    };
    FmcsaClient::new(&config).unwrap()
}

fn mc(s: &str) -> McNumber {
    McNumber::new(s).unwrap()
}

#[tokio::test]
async fn lookup_sends_web_key_and_returns_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/123456"))
        .and(query_param("webKey", "test-web-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": {
                "carrier": {
                    "legalName": "ABC TRUCKING LLC",
                    "dbaName": "ABC",
                    "allowedToOperate": "Y",
                    "safetyRating": "Satisfactory",
                    "oosDate": null,
                    "statusCode": "A"
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    match client.lookup_carrier(&mc("123456")).await.unwrap() {
        CarrierLookup::Found(carrier) => {
            assert_eq!(carrier.legal_name.as_deref(), Some("ABC TRUCKING LLC"));
            assert_eq!(carrier.dba_name.as_deref(), Some("ABC"));
            assert_eq!(carrier.allowed_to_operate.as_deref(), Some("Y"));
            assert_eq!(carrier.safety_rating.as_deref(), Some("Satisfactory"));
            assert!(carrier.oos_date.is_none());
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_preserves_base_path_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/qc/services/carriers/42"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FmcsaConfig {
        base_url: format!("{}/qc/services", mock_server.uri()).parse().unwrap(),
        web_key: Some(Zeroizing::new("k".into())),
        timeout_secs: 5,
    };
    let client = FmcsaClient::new(&config).unwrap();
    assert_eq!(
        client.lookup_carrier(&mc("42")).await.unwrap(),
        CarrierLookup::NotFound
    );
}

#[tokio::test]
async fn lookup_returns_found_for_out_of_service_carrier() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/333444"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": {"carrier": {"legalName": "Regional Logistics", "allowedToOperate": "Y", "oosDate": "2023-01-01"}}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    match client.lookup_carrier(&mc("333444")).await.unwrap() {
        CarrierLookup::Found(carrier) => {
            assert_eq!(carrier.oos_date.as_deref(), Some("2023-01-01"));
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_returns_not_found_on_404() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert_eq!(
        client.lookup_carrier(&mc("999999")).await.unwrap(),
        CarrierLookup::NotFound
    );
}

#[tokio::test]
async fn lookup_reports_no_content() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"content": null})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert_eq!(
        client.lookup_carrier(&mc("111")).await.unwrap(),
        CarrierLookup::NoContent
    );
}

#[tokio::test]
async fn lookup_reports_no_carrier_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/222"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": {"carrier": null, "retrievalDate": "2025-01-01T00:00:00"}
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert_eq!(
        client.lookup_carrier(&mc("222")).await.unwrap(),
        CarrierLookup::NoCarrierDetail
    );
}

#[tokio::test]
async fn lookup_maps_401_to_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/123456"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid webKey"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.lookup_carrier(&mc("123456")).await.unwrap_err();
    assert!(matches!(err, FmcsaError::Unauthorized { .. }), "got {err:?}");
}

#[tokio::test]
async fn lookup_maps_500_to_api_error_with_truncated_body() {
    let mock_server = MockServer::start().await;
    let long_body = "x".repeat(1000);

    Mock::given(method("GET"))
        .and(path("/carriers/123456"))
        .respond_with(ResponseTemplate::new(500).set_body_string(long_body))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    match client.lookup_carrier(&mc("123456")).await.unwrap_err() {
        FmcsaError::Api { status, body, .. } => {
            assert_eq!(status, 500);
            assert_eq!(body.len(), 200);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_maps_403_to_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/123456"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(matches!(
        client.lookup_carrier(&mc("123456")).await,
        Err(FmcsaError::Api { status: 403, .. })
    ));
}

#[tokio::test]
async fn lookup_rejects_non_json_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/123456"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert!(matches!(
        client.lookup_carrier(&mc("123456")).await,
        Err(FmcsaError::Deserialization { .. })
    ));
}

#[tokio::test]
async fn lookup_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/carriers/123456"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"content": null}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = FmcsaConfig {
        base_url: mock_server.uri().parse().unwrap(),
        web_key: Some(Zeroizing::new("test-web-key".into())),
        timeout_secs: 1,
    };
    let client = FmcsaClient::new(&config).unwrap();
    match client.lookup_carrier(&mc("123456")).await.unwrap_err() {
        FmcsaError::Timeout { timeout_secs, .. } => assert_eq!(timeout_secs, 1),
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn lookup_reports_unreachable() {
    // Port 1 is never listening.
    let config = FmcsaConfig::local_mock(1, "test-web-key").unwrap();
    let client = FmcsaClient::new(&config).unwrap();
    let err = client.lookup_carrier(&mc("123456")).await.unwrap_err();
    assert!(matches!(err, FmcsaError::Unreachable { .. }), "got {err:?}");
}

#[tokio::test]
async fn transport_errors_never_expose_web_key() {
    let config = FmcsaConfig::local_mock(1, "secret-registry-key").unwrap();
    let client = FmcsaClient::new(&config).unwrap();
    let err = client.lookup_carrier(&mc("123456")).await.unwrap_err();
    assert!(!err.to_string().contains("secret-registry-key"), "{err}");
    assert!(!format!("{err:?}").contains("secret-registry-key"), "{err:?}");
}
