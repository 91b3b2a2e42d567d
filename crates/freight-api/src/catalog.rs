//! # Load Catalog
//!
//! The catalog is a JSON array of [`LoadRecord`]s on disk. It is read from
//! scratch on every call so edits to the file show up on the next request.

use std::path::{Path, PathBuf};

use freight_core::LoadRecord;

/// A load catalog file.
#[derive(Debug, Clone)]
pub struct LoadCatalog {
    path: PathBuf,
}

/// Result of reading the catalog once.
#[derive(Debug)]
pub enum CatalogOutcome {
    /// The file held a JSON array of load records.
    Loaded(Vec<LoadRecord>),
    /// No file at the configured path.
    NotFound,
    /// The file exists but could not be read.
    Unreadable(String),
    /// The file was read but is not a JSON array of load records.
    ParseError(String),
}

impl LoadCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog file.
    pub async fn load(&self) -> CatalogOutcome {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return CatalogOutcome::NotFound,
            Err(e) => return CatalogOutcome::Unreadable(e.to_string()),
        };

        match serde_json::from_slice::<Vec<LoadRecord>>(&bytes) {
            Ok(records) => CatalogOutcome::Loaded(records),
            Err(e) => CatalogOutcome::ParseError(e.to_string()),
        }
    }

    /// Read the catalog, treating any failure as an empty catalog.
    pub async fn records(&self) -> Vec<LoadRecord> {
        self.load().await.into_records(&self.path)
    }
}

impl CatalogOutcome {
    /// Fail-open view of the outcome: every failure becomes an empty list,
    /// with a log line saying why.
    pub fn into_records(self, path: &Path) -> Vec<LoadRecord> {
        match self {
            Self::Loaded(records) => {
                tracing::debug!(path = %path.display(), count = records.len(), "loaded load catalog");
                records
            }
            Self::NotFound => {
                tracing::warn!(path = %path.display(), "load catalog not found; using empty catalog");
                Vec::new()
            }
            Self::Unreadable(reason) => {
                tracing::error!(path = %path.display(), %reason, "load catalog unreadable; using empty catalog");
                Vec::new()
            }
            Self::ParseError(reason) => {
                tracing::error!(path = %path.display(), %reason, "load catalog malformed; using empty catalog");
                Vec::new()
            }
        }
    }
}
