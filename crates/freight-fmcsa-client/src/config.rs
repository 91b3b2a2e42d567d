//! FMCSA registry client configuration.
//!
//! Defaults point to the production QCMobile service. Override via
//! environment variables or explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Production QCMobile service root.
pub const DEFAULT_BASE_URL: &str = "https://mobile.fmcsa.dot.gov/qc/services";

/// Default per-request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the FMCSA registry client.
///
/// The web key is optional at startup: a deployment without one still
/// serves load search, and verification fails with a configuration error
/// when it is actually invoked.
///
/// Custom `Debug` implementation redacts the `web_key` field.
#[derive(Clone)]
pub struct FmcsaConfig {
    /// Service root; lookups go to `{base_url}/carriers/{id}`.
    pub base_url: Url,
    /// `webKey` query-parameter credential.
    pub web_key: Option<Zeroizing<String>>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for FmcsaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmcsaConfig")
            .field("base_url", &self.base_url)
            .field("web_key", &self.web_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl FmcsaConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FMCSA_BASE_URL` (default: `https://mobile.fmcsa.dot.gov/qc/services`)
    /// - `FMCSA_API_KEY` (optional; empty is treated as unset)
    /// - `FMCSA_TIMEOUT_SECS` (default: 10)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_url("FMCSA_BASE_URL", DEFAULT_BASE_URL)?;
        let web_key = std::env::var("FMCSA_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(Zeroizing::new);

        Ok(Self {
            base_url,
            web_key,
            timeout_secs: std::env::var("FMCSA_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed.
    pub fn local_mock(port: u16, web_key: &str) -> Result<Self, ConfigError> {
        let raw = format!("http://127.0.0.1:{port}");
        Ok(Self {
            base_url: Url::parse(&raw)
                .map_err(|e| ConfigError::InvalidUrl("localhost".to_string(), e.to_string()))?,
            web_key: Some(Zeroizing::new(web_key.to_string())),
            timeout_secs: 5,
        })
    }

    /// Whether a web key is available.
    pub fn has_web_key(&self) -> bool {
        self.web_key.is_some()
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}
