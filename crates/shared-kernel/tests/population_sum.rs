// crates/shared-kernel/tests/population_sum.rs
use country_stats_shared_kernel::Population;

#[test]
fn population_sum() {
    let total = Population::checked_sum([1u64, 2, 3].into_iter().map(Population::from));
    assert_eq!(total.map(u64::from), Some(6));
}

#[test]
fn population_sum_of_empty_is_zero() {
    assert_eq!(Population::checked_sum([]), Some(Population::ZERO));
}

#[test]
fn population_sum_overflow_is_none() {
    let values = [Population::new(u64::MAX), Population::new(1)];
    assert_eq!(Population::checked_sum(values), None);
    assert_eq!(Population::new(u64::MAX).checked_add(Population::ZERO), Some(Population::new(u64::MAX)));
}

#[test]
fn default_is_zero() {
    assert!(Population::default().is_zero());
    assert_eq!(Population::default(), Population::ZERO);
}

#[test]
fn ordering_follows_value() {
    let mut values = vec![Population::new(30), Population::new(10), Population::new(20)];
    values.sort();
    assert_eq!(values, vec![Population::new(10), Population::new(20), Population::new(30)]);
}
