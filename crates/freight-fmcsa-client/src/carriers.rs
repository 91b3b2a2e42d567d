//! Typed client for the QCMobile carrier lookup.
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET    | `/carriers/{id}?webKey={key}` | Carrier snapshot |
//!
//! The registry wraps the record as `{"content": {"carrier": {...}}}`.
//! Either level may come back `null` or empty for carriers it cannot
//! describe, and those cases are reported separately from a 404.
//!
//! The `/carriers/{id}` endpoint is keyed by USDOT number. MC numbers are
//! passed through verbatim; see DESIGN.md for the open question.

use std::time::Duration;

use freight_core::McNumber;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use zeroize::Zeroizing;

use crate::config::FmcsaConfig;
use crate::error::{excerpt, FmcsaError};

// -- Response types -----------------------------------------------------------

/// Carrier record as returned inside `content.carrier`.
///
/// All fields are optional and unknown fields are ignored; the live
/// registry returns dozens of fields not modeled here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FmcsaCarrier {
    #[serde(default)]
    pub legal_name: Option<String>,
    #[serde(default)]
    pub dba_name: Option<String>,
    /// `"Y"` when the carrier may operate.
    #[serde(default)]
    pub allowed_to_operate: Option<String>,
    #[serde(default)]
    pub safety_rating: Option<String>,
    /// Present when the carrier has been placed out of service.
    #[serde(default)]
    pub oos_date: Option<String>,
}

/// What the registry said about one carrier.
#[derive(Debug, Clone, PartialEq)]
pub enum CarrierLookup {
    /// HTTP 404.
    NotFound,
    /// Success status with a missing or empty `content` block.
    NoContent,
    /// `content` present, but `content.carrier` missing or empty.
    NoCarrierDetail,
    /// A carrier record.
    Found(FmcsaCarrier),
}

// -- Client -------------------------------------------------------------------

/// Client for the FMCSA carrier registry.
///
/// Build one per request with [`FmcsaClient::new`]; it owns its own
/// connection pool, which is released when the client is dropped.
pub struct FmcsaClient {
    http: reqwest::Client,
    base_url: Url,
    web_key: Zeroizing<String>,
    timeout_secs: u64,
}

impl std::fmt::Debug for FmcsaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmcsaClient")
            .field("base_url", &self.base_url)
            .field("web_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl FmcsaClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// - [`FmcsaError::NotConfigured`] when no web key is set.
    /// - [`FmcsaError::ClientInit`] if the HTTP client cannot be built.
    pub fn new(config: &FmcsaConfig) -> Result<Self, FmcsaError> {
        let web_key = config.web_key.clone().ok_or(FmcsaError::NotConfigured)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(FmcsaError::ClientInit)?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            web_key,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Look up one carrier.
    ///
    /// Calls `GET {base_url}/carriers/{mc}?webKey={key}` exactly once.
    pub async fn lookup_carrier(&self, mc: &McNumber) -> Result<CarrierLookup, FmcsaError> {
        let endpoint = format!("GET /carriers/{mc}");
        let url = format!(
            "{}/carriers/{}",
            self.base_url.as_str().trim_end_matches('/'),
            mc.as_str()
        );

        tracing::debug!(%endpoint, "calling FMCSA carrier registry");

        let resp = self
            .http
            .get(&url)
            .query(&[("webKey", self.web_key.as_str())])
            .send()
            .await
            .map_err(|e| self.transport_error(&endpoint, e))?;

        let status = resp.status();
        tracing::debug!(%endpoint, status = status.as_u16(), "FMCSA responded");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(CarrierLookup::NotFound);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(FmcsaError::Unauthorized { endpoint });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FmcsaError::Api {
                endpoint,
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| self.transport_error(&endpoint, e))?;
        let body: Value =
            serde_json::from_slice(&bytes).map_err(|e| FmcsaError::Deserialization {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            })?;

        interpret(&endpoint, body)
    }

    /// The request URL carries the web key, so it is stripped from the error.
    fn transport_error(&self, endpoint: &str, e: reqwest::Error) -> FmcsaError {
        if e.is_timeout() {
            FmcsaError::Timeout {
                endpoint: endpoint.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else {
            FmcsaError::Unreachable {
                endpoint: endpoint.to_string(),
                source: e.without_url(),
            }
        }
    }
}

/// Classify a successful response body.
fn interpret(endpoint: &str, body: Value) -> Result<CarrierLookup, FmcsaError> {
    let content = match body.get("content") {
        Some(c) if !is_blank(c) => c,
        _ => return Ok(CarrierLookup::NoContent),
    };

    let carrier = match content.get("carrier") {
        Some(c) if !is_blank(c) => c.clone(),
        _ => return Ok(CarrierLookup::NoCarrierDetail),
    };

    serde_json::from_value(carrier)
        .map(CarrierLookup::Found)
        .map_err(|e| FmcsaError::Deserialization {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
}

/// `null`, `{}`, `[]` and `""` all mean "nothing here".
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const EP: &str = "GET /carriers/123456";

    #[test]
    fn missing_content_is_no_content() {
        assert_eq!(interpret(EP, json!({})).unwrap(), CarrierLookup::NoContent);
        assert_eq!(
            interpret(EP, json!({"content": null})).unwrap(),
            CarrierLookup::NoContent
        );
        assert_eq!(
            interpret(EP, json!({"content": {}})).unwrap(),
            CarrierLookup::NoContent
        );
        assert_eq!(
            interpret(EP, json!({"content": []})).unwrap(),
            CarrierLookup::NoContent
        );
    }

    #[test]
    fn non_object_body_is_no_content() {
        assert_eq!(interpret(EP, json!([1, 2])).unwrap(), CarrierLookup::NoContent);
    }

    #[test]
    fn missing_carrier_is_no_carrier_detail() {
        assert_eq!(
            interpret(EP, json!({"content": {"_links": {}}})).unwrap(),
            CarrierLookup::NoCarrierDetail
        );
        assert_eq!(
            interpret(EP, json!({"content": {"carrier": null}})).unwrap(),
            CarrierLookup::NoCarrierDetail
        );
        assert_eq!(
            interpret(EP, json!({"content": {"carrier": {}}})).unwrap(),
            CarrierLookup::NoCarrierDetail
        );
    }

    #[test]
    fn carrier_record_is_found() {
        let body = json!({
            "content": {
                "carrier": {
                    "legalName": "ABC TRUCKING LLC",
                    "dbaName": null,
                    "allowedToOperate": "Y",
                    "safetyRating": "S",
                    "oosDate": null,
                    "statusCode": "A",
                    "dotNumber": 1234567,
                    "totalPowerUnits": 12
                }
            }
        });
        match interpret(EP, body).unwrap() {
            CarrierLookup::Found(c) => {
                assert_eq!(c.legal_name.as_deref(), Some("ABC TRUCKING LLC"));
                assert_eq!(c.allowed_to_operate.as_deref(), Some("Y"));
                assert_eq!(c.safety_rating.as_deref(), Some("S"));
                assert!(c.oos_date.is_none());
            }
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn carrier_with_wrong_shape_is_deserialization_error() {
        let body = json!({"content": {"carrier": "not an object"}});
        assert!(matches!(
            interpret(EP, body),
            Err(FmcsaError::Deserialization { .. })
        ));
    }

    #[test]
    fn new_requires_web_key() {
        let mut cfg = FmcsaConfig::local_mock(9100, "k").unwrap();
        cfg.web_key = None;
        assert!(matches!(
            FmcsaClient::new(&cfg),
            Err(FmcsaError::NotConfigured)
        ));
    }

    #[test]
    fn client_debug_redacts_web_key() {
        let cfg = FmcsaConfig::local_mock(9100, "hidden-web-key").unwrap();
        let client = FmcsaClient::new(&cfg).unwrap();
        assert!(!format!("{client:?}").contains("hidden-web-key"));
    }
}
