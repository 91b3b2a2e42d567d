//! # Carrier Verification
//!
//! Turns a caller-supplied carrier number into a [`CarrierVerdict`]:
//!
//! 1. Trim and validate the identifier. Invalid input gets an ineligible
//!    verdict without touching the registry or its configuration.
//! 2. Build a registry client for this request (fails if no key is set).
//! 3. Look the carrier up once and normalize whatever came back.

use freight_core::{CarrierVerdict, McNumber, OperatingStatus};
use freight_fmcsa_client::{CarrierLookup, FmcsaCarrier, FmcsaClient, FmcsaConfig, FmcsaError};

/// Company name used when the registry gives neither a legal nor a DBA name.
pub const UNKNOWN_COMPANY: &str = "Unknown";

/// Verify one carrier against the registry.
pub async fn verify_carrier(config: &FmcsaConfig, raw: &str) -> Result<CarrierVerdict, FmcsaError> {
    let submitted = raw.trim();
    let mc = match McNumber::new(submitted) {
        Ok(mc) => mc,
        Err(e) => {
            tracing::info!(mc_number = %submitted, reason = %e, "rejected carrier number");
            return Ok(CarrierVerdict::invalid_format(submitted));
        }
    };

    let client = FmcsaClient::new(config)?;
    let verdict = match client.lookup_carrier(&mc).await? {
        CarrierLookup::NotFound | CarrierLookup::NoContent => CarrierVerdict::not_found(&mc),
        CarrierLookup::NoCarrierDetail => CarrierVerdict::detail_unavailable(&mc),
        CarrierLookup::Found(carrier) => normalize(&mc, carrier),
    };

    tracing::info!(
        mc_number = %mc,
        eligible = verdict.is_eligible,
        status = ?verdict.operating_status,
        "carrier verified"
    );
    Ok(verdict)
}

/// Build a verdict from a registry carrier record.
pub fn normalize(mc: &McNumber, carrier: FmcsaCarrier) -> CarrierVerdict {
    let company_name = non_empty(carrier.legal_name)
        .or_else(|| non_empty(carrier.dba_name))
        .unwrap_or_else(|| UNKNOWN_COMPANY.to_string());
    let allowed = carrier.allowed_to_operate.unwrap_or_else(|| "N".to_string());
    // Any oosDate on record, even a blank one, blocks eligibility.
    let out_of_service = carrier.oos_date.is_some();

    let status = OperatingStatus::classify(&allowed, out_of_service);
    CarrierVerdict::assessed(mc, company_name, carrier.safety_rating, status)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mc() -> McNumber {
        McNumber::new("123456").unwrap()
    }

    fn carrier(allowed: Option<&str>, oos: Option<&str>) -> FmcsaCarrier {
        FmcsaCarrier {
            legal_name: Some("ABC TRUCKING LLC".into()),
            allowed_to_operate: allowed.map(String::from),
            safety_rating: Some("Satisfactory".into()),
            oos_date: oos.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn allowed_and_in_service_is_eligible() {
        let v = normalize(&mc(), carrier(Some("Y"), None));
        assert!(v.is_eligible);
        assert_eq!(v.operating_status, Some(OperatingStatus::Active));
        assert_eq!(v.company_name.as_deref(), Some("ABC TRUCKING LLC"));
        assert_eq!(v.safety_rating.as_deref(), Some("Satisfactory"));
        assert_eq!(v.message, "Carrier is eligible to operate");
        assert_eq!(v.mc_number, "123456");
    }

    #[test]
    fn oos_date_overrides_allowed_flag() {
        let v = normalize(&mc(), carrier(Some("Y"), Some("2023-01-01")));
        assert!(!v.is_eligible);
        assert_eq!(v.operating_status, Some(OperatingStatus::OutOfService));
        assert_eq!(v.message, "Carrier is not eligible to operate");

        let v = normalize(&mc(), carrier(Some("N"), Some("2023-01-01")));
        assert_eq!(v.operating_status, Some(OperatingStatus::OutOfService));
    }

    #[test]
    fn blank_oos_date_still_blocks_eligibility() {
        let v = normalize(&mc(), carrier(Some("Y"), Some("")));
        assert!(!v.is_eligible);
        assert_eq!(v.operating_status, Some(OperatingStatus::OutOfService));
        assert_eq!(v.message, "Carrier is not eligible to operate");
    }

    #[test]
    fn missing_allowed_flag_defaults_to_not_authorized() {
        let v = normalize(&mc(), carrier(None, None));
        assert!(!v.is_eligible);
        assert_eq!(v.operating_status, Some(OperatingStatus::NotAuthorized));
    }

    #[test]
    fn lowercase_allowed_flag_is_not_authorized() {
        let v = normalize(&mc(), carrier(Some("y"), None));
        assert_eq!(v.operating_status, Some(OperatingStatus::NotAuthorized));
    }

    #[test]
    fn company_name_falls_back_to_dba_then_unknown() {
        let mut c = carrier(Some("Y"), None);
        c.legal_name = Some(String::new());
        c.dba_name = Some("ABC Freight".into());
        assert_eq!(normalize(&mc(), c).company_name.as_deref(), Some("ABC Freight"));

        let mut c = carrier(Some("Y"), None);
        c.legal_name = None;
        c.dba_name = None;
        assert_eq!(normalize(&mc(), c).company_name.as_deref(), Some(UNKNOWN_COMPANY));
    }

    #[test]
    fn missing_safety_rating_stays_absent() {
        let mut c = carrier(Some("Y"), None);
        c.safety_rating = None;
        assert!(normalize(&mc(), c).safety_rating.is_none());
    }

    #[tokio::test]
    async fn invalid_number_skips_configuration_check() {
        let mut config = FmcsaConfig::local_mock(1, "k").unwrap();
        config.web_key = None;

        let v = verify_carrier(&config, " ABC123 ").await.unwrap();
        assert!(!v.is_eligible);
        assert_eq!(v.mc_number, "ABC123");
        assert_eq!(v.message, "Invalid MC number format");
        assert!(v.operating_status.is_none());
    }

    #[tokio::test]
    async fn blank_number_is_invalid_format() {
        let config = FmcsaConfig::local_mock(1, "k").unwrap();
        let v = verify_carrier(&config, "   ").await.unwrap();
        assert_eq!(v.mc_number, "");
        assert_eq!(v.message, "Invalid MC number format");
    }

    #[tokio::test]
    async fn valid_number_without_key_is_not_configured() {
        let mut config = FmcsaConfig::local_mock(1, "k").unwrap();
        config.web_key = None;
        assert!(matches!(
            verify_carrier(&config, "123456").await,
            Err(FmcsaError::NotConfigured)
        ));
    }
}
