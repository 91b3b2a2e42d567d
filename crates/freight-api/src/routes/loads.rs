//! # Load Search Route
//!
//! `GET /api/v1/loads/search` filters the catalog with strict AND semantics:
//! origin and destination are case-insensitive substring matches, equipment
//! type must match exactly (ignoring case). No fuzzy fallback: a search
//! that matches nothing returns `[]`.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use freight_core::{search_loads, LoadQuery, LoadRecord, MaxResults};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::AppError;
use crate::extractors::extract_query;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/loads/search", get(search))
}

/// Query string accepted by the search endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Origin city or state, e.g. `Chicago, IL` (substring match).
    pub origin: Option<String>,
    /// Destination city or state, e.g. `Dallas, TX` (substring match).
    pub destination: Option<String>,
    /// Equipment type, e.g. `Dry Van`, `Flatbed`, `Reefer` (exact match).
    pub equipment_type: Option<String>,
    /// Maximum number of results, 1 to 20 (default 5).
    #[param(minimum = 1, maximum = 20)]
    pub max_results: Option<i64>,
}

impl TryFrom<SearchParams> for LoadQuery {
    type Error = freight_core::ValidationError;

    fn try_from(params: SearchParams) -> Result<Self, Self::Error> {
        let max_results = match params.max_results {
            Some(n) => MaxResults::new(n)?,
            None => MaxResults::default(),
        };
        Ok(LoadQuery {
            origin: params.origin,
            destination: params.destination,
            equipment_type: params.equipment_type,
            max_results,
        })
    }
}

/// GET /api/v1/loads/search: Strict load search.
#[utoipa::path(
    get,
    path = "/api/v1/loads/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching loads in catalog order", body = [LoadRecord]),
        (status = 401, description = "Missing, malformed or invalid API key", body = crate::error::ErrorBody),
        (status = 422, description = "Invalid query parameters", body = crate::error::ErrorBody),
    ),
    tag = "loads"
)]
pub(crate) async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<LoadRecord>>, AppError> {
    let query = LoadQuery::try_from(extract_query(params)?)?;
    let catalog = state.catalog().records().await;
    let total = catalog.len();

    let results = search_loads(catalog, &query);
    if results.is_empty() {
        tracing::info!(?query, "no loads matched");
    } else {
        tracing::info!(total, returned = results.len(), "load search complete");
    }
    Ok(Json(results))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_use_default_cap() {
        let query = LoadQuery::try_from(SearchParams::default()).unwrap();
        assert_eq!(query.max_results, MaxResults::default());
        assert!(query.origin.is_none());
    }

    #[test]
    fn explicit_cap_is_validated() {
        let params = SearchParams {
            max_results: Some(20),
            ..Default::default()
        };
        assert_eq!(LoadQuery::try_from(params).unwrap().max_results.get(), 20);

        for bad in [0, 21, -1] {
            let params = SearchParams {
                max_results: Some(bad),
                ..Default::default()
            };
            assert!(LoadQuery::try_from(params).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn filters_pass_through_untouched() {
        let params = SearchParams {
            origin: Some(" Chicago ".into()),
            destination: Some("TX".into()),
            equipment_type: Some("Dry Van".into()),
            max_results: None,
        };
        let query = LoadQuery::try_from(params).unwrap();
        assert_eq!(query.origin.as_deref(), Some(" Chicago "));
        assert_eq!(query.destination.as_deref(), Some("TX"));
        assert_eq!(query.equipment_type.as_deref(), Some("Dry Van"));
    }
}
