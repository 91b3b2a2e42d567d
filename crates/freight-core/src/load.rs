//! # Load Records
//!
//! One freight shipment offer as it appears in the static catalog file and
//! in search responses. Nothing here is cross-checked: pickup and delivery
//! timestamps are opaque strings and free-text fields are kept verbatim.

use serde::{Deserialize, Serialize};

/// A freight load offered on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
pub struct LoadRecord {
    /// Catalog identifier.
    pub load_id: String,
    /// Origin city/state, e.g. `"Chicago, IL"`.
    pub origin: String,
    /// Destination city/state.
    pub destination: String,
    /// Pickup time, not parsed.
    pub pickup_datetime: String,
    /// Delivery time, not parsed.
    pub delivery_datetime: String,
    /// Trailer category, e.g. `"Dry Van"`, `"Reefer"`, `"Flatbed"`.
    pub equipment_type: String,
    /// Posted rate in dollars.
    pub loadboard_rate: f64,
    /// Free-text notes.
    pub notes: String,
    /// Weight in pounds.
    pub weight: i64,
    /// Commodity description.
    pub commodity_type: String,
    /// Number of pieces.
    pub num_of_pieces: i64,
    /// Trip length in miles.
    pub miles: i64,
    /// Free-text dimensions.
    pub dimensions: String,
}
