//! # Application State
//!
//! Configuration is read from the environment once at startup into an
//! immutable [`AppConfig`]; handlers only ever see it through [`AppState`].

use std::path::PathBuf;
use std::sync::Arc;

use freight_fmcsa_client::FmcsaConfig;
use zeroize::Zeroizing;

use crate::catalog::LoadCatalog;
use crate::middleware::metrics::ApiMetrics;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default location of the load catalog, relative to the working directory.
pub const DEFAULT_LOADS_FILE: &str = "data/loads.json";

/// Service configuration.
///
/// Custom `Debug` redacts the `api_key` to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Secret expected after `ApiKey ` in the `Authorization` header.
    pub api_key: Zeroizing<String>,
    /// Path of the JSON load catalog.
    pub loads_file: PathBuf,
    /// Carrier registry settings.
    pub fmcsa: FmcsaConfig,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("api_key", &"[REDACTED]")
            .field("loads_file", &self.loads_file)
            .field("fmcsa", &self.fmcsa)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FREIGHT_API_KEY` (required, non-empty)
    /// - `PORT` (default: 8000)
    /// - `LOADS_FILE` (default: `data/loads.json`)
    /// - `FMCSA_*`, see [`FmcsaConfig::from_env`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("FREIGHT_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .map(Zeroizing::new)
            .ok_or(ConfigError::MissingApiKey)?;

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let loads_file = std::env::var("LOADS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOADS_FILE));

        Ok(Self {
            port,
            api_key,
            loads_file,
            fmcsa: FmcsaConfig::from_env()?,
        })
    }
}

/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("FREIGHT_API_KEY is not set; refusing to start without a service credential")]
    MissingApiKey,
    #[error(transparent)]
    Fmcsa(#[from] freight_fmcsa_client::ConfigError),
}

/// Shared application state passed to all route handlers.
///
/// Cloning is cheap: the configuration sits behind an `Arc` and the metrics
/// registry is reference-counted internally.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Build state around a configuration, registering a fresh metrics registry.
    pub fn new(config: AppConfig) -> Result<Self, prometheus::Error> {
        Ok(Self {
            config: Arc::new(config),
            metrics: ApiMetrics::new()?,
        })
    }

    /// The load catalog at the configured path.
    pub fn catalog(&self) -> LoadCatalog {
        LoadCatalog::new(&self.config.loads_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            port: DEFAULT_PORT,
            api_key: Zeroizing::new("service-secret".into()),
            loads_file: PathBuf::from(DEFAULT_LOADS_FILE),
            fmcsa: FmcsaConfig::local_mock(9100, "registry-secret").unwrap(),
        }
    }

    #[test]
    fn debug_redacts_both_secrets() {
        let rendered = format!("{:?}", config());
        assert!(!rendered.contains("service-secret"));
        assert!(!rendered.contains("registry-secret"));
        assert!(rendered.contains("data/loads.json"));
    }

    #[test]
    fn state_points_catalog_at_configured_file() {
        let state = AppState::new(config()).unwrap();
        assert_eq!(state.catalog().path(), std::path::Path::new(DEFAULT_LOADS_FILE));
    }

    #[test]
    fn state_clone_shares_config() {
        let state = AppState::new(config()).unwrap();
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.config, &clone.config));
    }
}
