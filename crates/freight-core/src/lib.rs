#![deny(missing_docs)]

//! # freight-core: Domain Types for the Freight Brokerage API
//!
//! Every other crate in the workspace depends on this one. It performs no
//! I/O: the HTTP service reads catalogs and calls the carrier registry,
//! this crate only decides what the answers mean.
//!
//! ## Contents
//!
//! - [`McNumber`]: validated motor-carrier identifier (digits only).
//! - [`CarrierVerdict`] and [`OperatingStatus`]: the normalized eligibility
//!   answer returned to callers.
//! - [`LoadRecord`]: one freight shipment offer from the static catalog.
//! - [`LoadQuery`], [`MaxResults`] and [`search_loads`]: the strict,
//!   conjunctive load search filter.
//! - [`ValidationError`]: construction failures for the newtypes above.

pub mod carrier;
pub mod error;
pub mod load;
pub mod search;

pub use carrier::{CarrierVerdict, McNumber, OperatingStatus};
pub use error::ValidationError;
pub use load::LoadRecord;
pub use search::{search_loads, LoadQuery, MaxResults};
