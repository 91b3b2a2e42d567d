// SPDX-License-Identifier: BUSL-1.1
//! In-memory carrier store using DashMap.
//!
//! Carrier records are kept as raw camelCase JSON, exactly as they appear
//! under `content.carrier` in a QCMobile response.

use std::sync::Arc;

use dashmap::DashMap;
use serde_json::{json, Value};

/// Web key accepted when `FMCSA_STUB_WEB_KEY` is unset.
pub const DEFAULT_WEB_KEY: &str = "stub-web-key";

struct Inner {
    web_key: String,
    carriers: DashMap<String, Value>,
}

/// Shared application state.
///
/// Cheaply cloneable via `Arc`; all clones share the same data.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

impl AppState {
    /// Empty store accepting `web_key`.
    pub fn new(web_key: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                web_key: web_key.into(),
                carriers: DashMap::new(),
            }),
        }
    }

    /// Store preloaded with the fixture carriers.
    pub fn seeded(web_key: impl Into<String>) -> Self {
        let state = Self::new(web_key);
        for (number, record) in fixtures() {
            state.carriers().insert(number.to_string(), record);
        }
        state
    }

    pub fn web_key(&self) -> &str {
        &self.inner.web_key
    }

    pub fn carriers(&self) -> &DashMap<String, Value> {
        &self.inner.carriers
    }
}

fn carrier(
    legal_name: &str,
    safety_rating: &str,
    dot_number: u64,
    oos_date: Option<&str>,
) -> Value {
    json!({
        "legalName": legal_name,
        "dbaName": null,
        "allowedToOperate": "Y",
        "safetyRating": safety_rating,
        "oosDate": oos_date,
        "statusCode": "A",
        "dotNumber": dot_number
    })
}

fn fixtures() -> Vec<(&'static str, Value)> {
    vec![
        ("123456", carrier("ABC Trucking LLC", "Satisfactory", 1_234_561, None)),
        ("789012", carrier("XYZ Transport Inc", "Satisfactory", 1_789_012, None)),
        ("456789", carrier("Fast Freight Solutions", "Satisfactory", 1_456_789, None)),
        ("111222", carrier("Nationwide Carriers", "Not Rated", 1_111_222, None)),
        (
            "333444",
            carrier("Regional Logistics", "Conditional", 1_333_444, Some("2023-01-01")),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_holds_fixtures() {
        let state = AppState::seeded(DEFAULT_WEB_KEY);
        assert_eq!(state.carriers().len(), 5);
        let abc = state.carriers().get("123456").unwrap();
        assert_eq!(abc["legalName"], "ABC Trucking LLC");
        assert!(abc["oosDate"].is_null());
    }

    #[test]
    fn regional_logistics_is_out_of_service() {
        let state = AppState::seeded(DEFAULT_WEB_KEY);
        let record = state.carriers().get("333444").unwrap();
        assert_eq!(record["oosDate"], "2023-01-01");
    }

    #[test]
    fn clones_share_data() {
        let state = AppState::new("k");
        let clone = state.clone();
        state.carriers().insert("1".into(), json!({}));
        assert_eq!(clone.carriers().len(), 1);
        assert_eq!(clone.web_key(), "k");
    }
}
