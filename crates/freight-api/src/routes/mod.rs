//! # API Route Modules
//!
//! - `service`: unauthenticated service metadata at `/`.
//! - `carriers`: carrier eligibility verification against FMCSA.
//! - `loads`: strict search over the load catalog.

pub mod carriers;
pub mod loads;
pub mod service;
