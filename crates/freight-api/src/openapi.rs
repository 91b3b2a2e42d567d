//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI document,
//! served unauthenticated at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Adds the `Authorization: ApiKey <key>` security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Send `ApiKey <key>`. The key is set via FREIGHT_API_KEY.",
                ))),
            );
        }
    }
}

/// Assembled OpenAPI document for the whole API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Freight Brokerage API",
        description = "Carrier eligibility verification against the FMCSA registry and strict search over a static load catalog.\n\nAll `/api/v1/*` endpoints require `Authorization: ApiKey <key>`. `/`, `/health/*`, `/metrics` and `/openapi.json` are unauthenticated.",
        license(name = "BUSL-1.1")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server"),
    ),
    security(
        ("api_key" = [])
    ),
    paths(
        crate::routes::service::service_info,
        crate::routes::carriers::verify_carrier,
        crate::routes::loads::search,
    ),
    components(
        schemas(
            freight_core::CarrierVerdict,
            freight_core::OperatingStatus,
            freight_core::LoadRecord,
            crate::routes::service::ServiceInfo,
            crate::routes::service::ServiceEndpoints,
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "service", description = "Service metadata"),
        (name = "carriers", description = "Carrier eligibility verification via FMCSA QCMobile"),
        (name = "loads", description = "Strict load catalog search"),
    )
)]
pub struct ApiDoc;

/// Serves the OpenAPI JSON document at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_generates_with_crate_version() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Freight Brokerage API");
        assert_eq!(spec.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn spec_has_business_paths() {
        let spec = ApiDoc::openapi();
        for path in ["/", "/api/v1/verify-carrier/{carrier_number}", "/api/v1/loads/search"] {
            assert!(spec.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn spec_has_schemas_and_security_scheme() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("components");
        for schema in ["CarrierVerdict", "OperatingStatus", "LoadRecord", "ServiceInfo", "ErrorBody"] {
            assert!(components.schemas.contains_key(schema), "missing schema {schema}");
        }
        assert!(components.security_schemes.contains_key("api_key"));
    }

    #[test]
    fn spec_serializes_to_json() {
        let json = serde_json::to_string(&ApiDoc::openapi()).unwrap();
        assert!(json.contains("verify-carrier"));
    }
}
