//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps gate failures, query validation failures and registry client
//! errors to HTTP status codes with a JSON error body.
//! Internal error details are never returned to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use freight_fmcsa_client::FmcsaError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses use this format for consistency across the API surface.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Inner error detail.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "UPSTREAM_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional details. Only registry errors carry them today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing, wrong-scheme or non-matching credential (401).
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authorization header that is not `<scheme> <token>` (401).
    #[error("malformed credential: {0}")]
    MalformedCredential(String),

    /// Query parameters failed validation (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// A required server-side setting is missing or was rejected (500).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The carrier registry answered with a non-success status (502).
    #[error("FMCSA API returned {status}")]
    Upstream { status: u16, excerpt: String },

    /// The carrier registry could not be reached (502). The cause is logged,
    /// not returned.
    #[error("error connecting to FMCSA: {0}")]
    UpstreamUnreachable(String),

    /// The carrier registry did not answer in time (504). The cause is
    /// logged, not returned.
    #[error("FMCSA request timed out: {0}")]
    Timeout(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code for this error.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            Self::MalformedCredential(_) => (StatusCode::UNAUTHORIZED, "MALFORMED_CREDENTIAL"),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR"),
            Self::Configuration(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR"),
            Self::Upstream { .. } => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::UpstreamUnreachable(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_UNREACHABLE"),
            Self::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Upstream { status, excerpt } => Some(serde_json::json!({
                "status": status,
                "body_excerpt": excerpt,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            Self::UpstreamUnreachable(_) => "Unable to reach the FMCSA registry".to_string(),
            Self::Timeout(_) => "FMCSA registry request timed out".to_string(),
            other => other.to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::Configuration(_) => tracing::error!(error = %self, "server misconfigured"),
            Self::Upstream { excerpt, .. } => {
                tracing::error!(error = %self, body = %excerpt, "FMCSA API error")
            }
            Self::UpstreamUnreachable(_) | Self::Timeout(_) => {
                tracing::error!(error = %self, "FMCSA request failed")
            }
            _ => {}
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                details: self.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert query validation failures to API errors.
impl From<freight_core::ValidationError> for AppError {
    fn from(err: freight_core::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Convert registry client errors to API errors.
impl From<FmcsaError> for AppError {
    fn from(err: FmcsaError) -> Self {
        match err {
            FmcsaError::NotConfigured => Self::Configuration(
                "FMCSA API key not configured; set FMCSA_API_KEY".to_string(),
            ),
            FmcsaError::Unauthorized { .. } => {
                Self::Configuration("invalid FMCSA API key".to_string())
            }
            FmcsaError::Api { status, body, .. } => Self::Upstream {
                status,
                excerpt: body,
            },
            FmcsaError::Deserialization { .. } => Self::Internal(err.to_string()),
            FmcsaError::Timeout { .. } => Self::Timeout(err.to_string()),
            FmcsaError::Unreachable { .. } => Self::UpstreamUnreachable(err.to_string()),
            FmcsaError::ClientInit(_) => Self::Internal(err.to_string()),
        }
    }
}
