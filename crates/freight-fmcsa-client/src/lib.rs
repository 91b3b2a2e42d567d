//! # freight-fmcsa-client -- Typed Rust client for the FMCSA carrier registry
//!
//! Wraps the QCMobile carrier lookup (`GET /carriers/{id}?webKey=...`) and
//! reports what the registry said as a [`CarrierLookup`], or why it could
//! not be asked as an [`FmcsaError`].
//!
//! ## Architecture
//!
//! This crate is the only path from the workspace to the registry. It does
//! not decide eligibility: it hands the raw [`FmcsaCarrier`] record to the
//! API layer, which normalizes it into a verdict.
//!
//! ## Lifecycle
//!
//! A [`FmcsaClient`] is cheap to build and is meant to live for one request.
//! Each lookup issues exactly one HTTP call, bounded by the configured
//! timeout. There are no retries.

pub mod carriers;
pub mod config;
pub mod error;

pub use carriers::{CarrierLookup, FmcsaCarrier, FmcsaClient};
pub use config::{ConfigError, FmcsaConfig};
pub use error::FmcsaError;
