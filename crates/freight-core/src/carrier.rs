//! # Carrier Identifiers and Eligibility Verdicts
//!
//! [`McNumber`] is the validated form of a caller-supplied carrier number.
//! [`CarrierVerdict`] is the normalized answer the API returns, whatever the
//! registry said. "Not eligible" is a legitimate business answer, so bad
//! identifiers and unknown carriers produce verdicts, not errors.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Verdict message for identifiers that are not all digits.
const MSG_INVALID_FORMAT: &str = "Invalid MC number format";
/// Verdict message when the registry has no record for the carrier.
const MSG_NOT_FOUND: &str = "Carrier not found in FMCSA database";
/// Verdict message when the registry record has no carrier detail block.
const MSG_DETAIL_UNAVAILABLE: &str = "Carrier information not available";

/// Motor-carrier operating authority number.
///
/// # Validation
///
/// - Must be non-empty
/// - Must consist only of ASCII decimal digits (leading zeros are kept)
///
/// Surrounding whitespace is not stripped here; callers trim before
/// constructing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct McNumber(String);

impl McNumber {
    /// Create an MC number, validating the digits-only format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMcNumber`] if the string is empty
    /// or contains anything other than `0-9`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidMcNumber(s));
        }
        Ok(Self(s))
    }

    /// Access the MC number string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for McNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for McNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Operating status label derived from the registry record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
pub enum OperatingStatus {
    /// Allowed to operate and not out of service.
    #[serde(rename = "Active")]
    Active,
    /// An out-of-service date is on record. Takes precedence over the
    /// allowed-to-operate flag.
    #[serde(rename = "Out of Service")]
    OutOfService,
    /// Not out of service, but the registry does not allow operation.
    #[serde(rename = "Not Authorized")]
    NotAuthorized,
}

impl OperatingStatus {
    /// Classify a carrier from its registry flags.
    ///
    /// `allowed_to_operate` is compared against the literal `"Y"`; any other
    /// value (including lowercase `"y"`) counts as not allowed.
    pub fn classify(allowed_to_operate: &str, out_of_service: bool) -> Self {
        if out_of_service {
            Self::OutOfService
        } else if allowed_to_operate == "Y" {
            Self::Active
        } else {
            Self::NotAuthorized
        }
    }

    /// Whether a carrier with this status may be booked.
    pub fn is_eligible(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Return the wire label for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OutOfService => "Out of Service",
            Self::NotAuthorized => "Not Authorized",
        }
    }
}

impl std::fmt::Display for OperatingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized carrier eligibility answer.
///
/// Optional fields serialize as `null` so the response shape is stable
/// across every outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
pub struct CarrierVerdict {
    /// The submitted carrier number, echoed back (trimmed).
    pub mc_number: String,
    /// Whether the carrier is authorized and not out of service.
    pub is_eligible: bool,
    /// Legal name, falling back to the doing-business-as name.
    pub company_name: Option<String>,
    /// Safety rating exactly as the registry reported it.
    pub safety_rating: Option<String>,
    /// Operating status label, present only when a registry record was read.
    pub operating_status: Option<OperatingStatus>,
    /// Human-readable summary.
    pub message: String,
}

impl CarrierVerdict {
    /// Verdict for an identifier that failed the digits-only check.
    pub fn invalid_format(mc_number: impl Into<String>) -> Self {
        Self::ineligible(mc_number, MSG_INVALID_FORMAT)
    }

    /// Verdict for a carrier the registry does not know.
    pub fn not_found(mc_number: &McNumber) -> Self {
        Self::ineligible(mc_number.as_str(), MSG_NOT_FOUND)
    }

    /// Verdict for a registry record whose carrier detail block is empty.
    pub fn detail_unavailable(mc_number: &McNumber) -> Self {
        Self::ineligible(mc_number.as_str(), MSG_DETAIL_UNAVAILABLE)
    }

    /// Verdict built from a registry record that was read successfully.
    ///
    /// Eligibility follows the status: only [`OperatingStatus::Active`]
    /// carriers are eligible.
    pub fn assessed(
        mc_number: &McNumber,
        company_name: impl Into<String>,
        safety_rating: Option<String>,
        status: OperatingStatus,
    ) -> Self {
        let is_eligible = status.is_eligible();
        let message = if is_eligible {
            "Carrier is eligible to operate"
        } else {
            "Carrier is not eligible to operate"
        };
        Self {
            mc_number: mc_number.as_str().to_string(),
            is_eligible,
            company_name: Some(company_name.into()),
            safety_rating,
            operating_status: Some(status),
            message: message.to_string(),
        }
    }

    fn ineligible(mc_number: impl Into<String>, message: &str) -> Self {
        Self {
            mc_number: mc_number.into(),
            is_eligible: false,
            company_name: None,
            safety_rating: None,
            operating_status: None,
            message: message.to_string(),
        }
    }
}
