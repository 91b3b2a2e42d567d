// SPDX-License-Identifier: BUSL-1.1
//! Route definitions for the FMCSA registry stub.
//!
//! Implements the one endpoint `freight-fmcsa-client` calls, with responses
//! shaped like the live service:
//!
//! | Request                         | Response |
//! |---------------------------------|----------|
//! | wrong or missing `webKey`       | 401 |
//! | unknown carrier number          | 404 `{"content": null}` |
//! | known carrier number            | 200 `{"content": {"carrier": {...}}}` |

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::store::AppState;

/// Build the router with all stub routes.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/carriers/:number", get(carrier_get))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Deserialize)]
struct KeyQuery {
    #[serde(rename = "webKey")]
    web_key: Option<String>,
}

async fn carrier_get(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Query(query): Query<KeyQuery>,
) -> Response {
    if query.web_key.as_deref() != Some(state.web_key()) {
        tracing::warn!(%number, "rejected lookup with bad webKey");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"content": "Webkey not found"})),
        )
            .into_response();
    }

    match state.carriers().get(&number) {
        Some(entry) => {
            tracing::debug!(%number, "carrier found");
            Json(json!({"content": {"carrier": entry.value().clone()}})).into_response()
        }
        None => {
            tracing::debug!(%number, "carrier not found");
            (StatusCode::NOT_FOUND, Json(json!({"content": null}))).into_response()
        }
    }
}
