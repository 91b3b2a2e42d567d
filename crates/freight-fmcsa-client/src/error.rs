//! FMCSA registry client error types.

/// Errors from registry calls.
///
/// Carrier-specific outcomes (not found, empty record) are not errors; they
/// are reported through [`crate::CarrierLookup`].
#[derive(Debug, thiserror::Error)]
pub enum FmcsaError {
    /// No web key is configured for this deployment.
    #[error("FMCSA API key not configured; set FMCSA_API_KEY")]
    NotConfigured,

    /// The registry rejected the configured web key (HTTP 401).
    #[error("FMCSA rejected the configured API key calling {endpoint}")]
    Unauthorized { endpoint: String },

    /// Registry returned a non-success status other than 401/404.
    /// `body` is truncated to [`BODY_EXCERPT_CHARS`] characters.
    #[error("FMCSA API {endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("FMCSA request to {endpoint} timed out after {timeout_secs}s")]
    Timeout { endpoint: String, timeout_secs: u64 },

    /// Connection-level failure (DNS, refused, TLS, reset).
    #[error("error connecting to FMCSA calling {endpoint}: {source}")]
    Unreachable {
        endpoint: String,
        source: reqwest::Error,
    },

    /// Success status, but the body could not be read as a carrier record.
    #[error("failed to deserialize response from {endpoint}: {reason}")]
    Deserialization { endpoint: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build FMCSA HTTP client: {0}")]
    ClientInit(reqwest::Error),
}

/// Maximum number of body characters kept in [`FmcsaError::Api`].
pub const BODY_EXCERPT_CHARS: usize = 200;

/// Truncate a response body to at most [`BODY_EXCERPT_CHARS`] characters,
/// respecting UTF-8 boundaries.
pub(crate) fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_keeps_short_bodies() {
        assert_eq!(excerpt("bad gateway"), "bad gateway");
    }

    #[test]
    fn excerpt_truncates_on_char_boundary() {
        let body = "é".repeat(500);
        let cut = excerpt(&body);
        assert_eq!(cut.chars().count(), BODY_EXCERPT_CHARS);
    }

    #[test]
    fn api_error_display_carries_status_and_body() {
        let err = FmcsaError::Api {
            endpoint: "GET /carriers/123".into(),
            status: 503,
            body: "maintenance".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("maintenance"));
    }
}
