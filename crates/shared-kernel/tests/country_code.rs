// crates/shared-kernel/tests/country_code.rs
use country_stats_shared_kernel::{CountryCode, DomainError};

#[test]
fn parse_trims_whitespace() {
    let code = CountryCode::parse("  HU ").expect("valid code");
    assert_eq!(code.as_str(), "HU");
    assert_eq!(code.to_string(), "HU");
}

#[test]
fn blank_code_is_rejected() {
    let err = CountryCode::parse("   ").unwrap_err();
    assert!(matches!(err, DomainError::InvalidCountryCode { .. }));
}
