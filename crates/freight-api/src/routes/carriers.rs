//! # Carrier Verification Route
//!
//! `GET /api/v1/verify-carrier/:carrier_number` asks the FMCSA registry
//! whether a carrier may be booked. Carrier-level answers (bad number,
//! unknown carrier, not authorized) are 200 responses with
//! `is_eligible: false`; only failures to ask the registry are errors.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use freight_core::CarrierVerdict;

use crate::error::AppError;
use crate::state::AppState;
use crate::verification;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/verify-carrier/:carrier_number", get(verify_carrier))
}

/// GET /api/v1/verify-carrier/{carrier_number}: Carrier eligibility verdict.
#[utoipa::path(
    get,
    path = "/api/v1/verify-carrier/{carrier_number}",
    params(("carrier_number" = String, Path, description = "MC number, digits only")),
    responses(
        (status = 200, description = "Eligibility verdict", body = CarrierVerdict),
        (status = 401, description = "Missing, malformed or invalid API key", body = crate::error::ErrorBody),
        (status = 500, description = "FMCSA key missing or rejected, or unreadable FMCSA response", body = crate::error::ErrorBody),
        (status = 502, description = "FMCSA error or unreachable", body = crate::error::ErrorBody),
        (status = 504, description = "FMCSA timed out", body = crate::error::ErrorBody),
    ),
    tag = "carriers"
)]
pub(crate) async fn verify_carrier(
    State(state): State<AppState>,
    Path(carrier_number): Path<String>,
) -> Result<Json<CarrierVerdict>, AppError> {
    let verdict = verification::verify_carrier(&state.config.fmcsa, &carrier_number).await?;
    Ok(Json(verdict))
}
