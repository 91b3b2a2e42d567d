//! # freight-api: Axum API Service for Freight Brokerage
//!
//! Verifies carrier eligibility against the FMCSA registry and searches a
//! static load catalog.
//!
//! ## API Surface
//!
//! | Path                                      | Module                 | Auth |
//! |-------------------------------------------|------------------------|------|
//! | `GET /`                                   | [`routes::service`]    | no   |
//! | `GET /api/v1/verify-carrier/:carrier_number` | [`routes::carriers`] | yes  |
//! | `GET /api/v1/loads/search`                | [`routes::loads`]      | yes  |
//! | `GET /health/liveness`, `/health/readiness` | this module          | no   |
//! | `GET /metrics`                            | this module            | no   |
//! | `GET /openapi.json`                       | [`openapi`]            | no   |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! CorsLayer → TraceLayer → MetricsMiddleware → AuthMiddleware → Handler
//! ```
//!
//! Authentication wraps only the `/api/v1/*` routes.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod verification;

use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::auth::AuthConfig;

pub use error::AppError;
pub use state::{AppConfig, AppState};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        api_key: state.config.api_key.clone(),
    };

    // Authenticated API routes.
    let api = Router::new()
        .merge(routes::carriers::router())
        .merge(routes::loads::router())
        .layer(from_fn(auth::auth_middleware))
        .layer(axum::Extension(auth_config));

    // Unauthenticated routes.
    let public = Router::new()
        .merge(routes::service::router())
        .merge(openapi::router())
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .route("/metrics", axum::routing::get(prometheus_metrics));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(public)
        .merge(api)
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(axum::Extension(state.metrics.clone()))
        .layer(middleware::tracing_layer::layer())
        .layer(cors)
        .with_state(state)
}

/// GET /metrics: Prometheus metrics scrape endpoint.
async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics.gather_and_encode() {
        Ok(body) => (
            StatusCode::OK,
            [(
                axum::http::header::CONTENT_TYPE,
                "text/plain; version=0.0.4; charset=utf-8",
            )],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to encode Prometheus metrics: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e).into_response()
        }
    }
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the service holds no connections, so serving means ready.
async fn readiness() -> &'static str {
    "ready"
}
