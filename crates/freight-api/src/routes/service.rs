//! # Service Metadata
//!
//! `GET /` describes the service and reports how many loads the catalog
//! currently holds. It is mounted outside the auth middleware.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::state::AppState;

pub const SERVICE_NAME: &str = "Freight Brokerage API";

/// Service metadata returned at the root path.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    /// Always `"operational"` while the process is serving.
    pub status: String,
    /// Number of loads in the catalog right now (0 if it cannot be read).
    pub loads_available: usize,
    pub endpoints: ServiceEndpoints,
}

/// Paths of the business endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceEndpoints {
    pub verify_carrier: String,
    pub search_loads: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(service_info))
}

/// GET /: Service metadata and current catalog size.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo),
    ),
    security(()),
    tag = "service"
)]
pub(crate) async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    let loads_available = state.catalog().records().await.len();

    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "operational".to_string(),
        loads_available,
        endpoints: ServiceEndpoints {
            verify_carrier: "/api/v1/verify-carrier".to_string(),
            search_loads: "/api/v1/loads/search".to_string(),
        },
    })
}
