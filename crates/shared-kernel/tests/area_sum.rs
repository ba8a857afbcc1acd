// crates/shared-kernel/tests/area_sum.rs
use std::str::FromStr;

use country_stats_shared_kernel::Area;
use rust_decimal::Decimal;

#[test]
fn exact_sum_has_no_rounding_error() {
    let values = ["0.1", "0.2"].map(|s| Area::from_str(s).unwrap());
    let total = Area::checked_sum(values).unwrap();
    assert_eq!(total, Area::from_str("0.3").unwrap());
    assert_eq!(total.to_string(), "0.3");
}

#[test]
fn as_f64_is_close_to_decimal() {
    let area = Area::from_str("28748").unwrap();
    assert!((area.as_f64() - 28_748.0).abs() < f64::EPSILON);
}

#[test]
fn zero_and_default_agree() {
    assert_eq!(Area::default(), Area::ZERO);
    assert!(Area::ZERO.is_zero());
    assert!(!Area::from(1u64).is_zero());
}

#[test]
fn display_drops_trailing_zeros() {
    let area = Area::from_str("93030.00").unwrap();
    assert_eq!(area.to_string(), "93030");
}

#[test]
fn sum_past_decimal_range_is_none() {
    let values = [Area::new(Decimal::MAX), Area::from(1u64)];
    assert_eq!(Area::checked_sum(values), None);
}
