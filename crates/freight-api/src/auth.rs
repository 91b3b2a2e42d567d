//! # Authentication Middleware
//!
//! Static API key authentication for `/api/v1/*` endpoints.
//!
//! ## Header Format
//!
//! ```text
//! Authorization: ApiKey {secret}
//! ```
//!
//! The header is split once on the first space. A header without a space, or
//! with nothing before it, is malformed. The scheme must be exactly `ApiKey`
//! and the token must equal the configured secret byte for byte.

use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::AppError;

/// The only accepted authorization scheme.
pub const SCHEME: &str = "ApiKey";

/// Why a request was turned away at the gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing authorization header")]
    Missing,
    #[error("invalid authorization format, expected: ApiKey <key>")]
    Malformed,
    #[error("authorization header must use ApiKey scheme")]
    WrongScheme,
    #[error("invalid API key")]
    InvalidKey,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Malformed => Self::MalformedCredential(err.to_string()),
            _ => Self::Unauthorized(err.to_string()),
        }
    }
}

// ── Auth Configuration ──────────────────────────────────────────────────────

/// Auth configuration injected into request extensions.
///
/// Custom `Debug` redacts the key value to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AuthConfig {
    pub api_key: Zeroizing<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

// ── Key Validation ──────────────────────────────────────────────────────────

/// Constant-time comparison of API keys.
///
/// When lengths differ, performs a dummy comparison so the mismatch costs
/// the same as a full compare.
fn constant_time_key_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Check an `Authorization` header value against the configured key.
pub fn check_authorization(header: Option<&str>, expected: &str) -> Result<(), AuthError> {
    let value = header.ok_or(AuthError::Missing)?;

    let (scheme, token) = value.split_once(' ').ok_or(AuthError::Malformed)?;
    if scheme.is_empty() {
        return Err(AuthError::Malformed);
    }
    if scheme != SCHEME {
        return Err(AuthError::WrongScheme);
    }
    if !constant_time_key_eq(token, expected) {
        return Err(AuthError::InvalidKey);
    }
    Ok(())
}

// ── Middleware ───────────────────────────────────────────────────────────────

/// Reject requests whose `Authorization` header does not carry the
/// configured API key.
///
/// Fails closed: a router mounted without an [`AuthConfig`] extension
/// rejects every request.
pub async fn auth_middleware(request: Request, next: Next) -> Response {
    let Some(config) = request.extensions().get::<AuthConfig>().cloned() else {
        tracing::error!("auth middleware mounted without AuthConfig; rejecting request");
        return AppError::Unauthorized("authentication not configured".into()).into_response();
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match check_authorization(auth_header, &config.api_key) {
        Ok(()) => next.run(request).await,
        Err(err) => {
            tracing::warn!(reason = %err, path = %request.uri().path(), "authentication failed");
            AppError::from(err).into_response()
        }
    }
}
