use std::fmt;

use serde::Serialize;

/// Count, sum, min and max of integer samples; the average is derived.
///
/// An empty summary has no min, max or average. The sum is kept in `u128`
/// so it cannot overflow for any list of `u64` samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IntSummary {
    count: u64,
    sum: u128,
    min: Option<u64>,
    max: Option<u64>,
}

impl IntSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, value: u64) {
        self.count += 1;
        self.sum += u128::from(value);
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> u128 {
        self.sum
    }

    pub fn min(&self) -> Option<u64> {
        self.min
    }

    pub fn max(&self) -> Option<u64> {
        self.max
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

impl Extend<u64> for IntSummary {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for value in iter {
            self.accept(value);
        }
    }
}

impl FromIterator<u64> for IntSummary {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut summary = Self::new();
        summary.extend(iter);
        summary
    }
}

impl fmt::Display for IntSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "count={}, sum={}", self.count, self.sum)?;
        write_optional(f, "min", self.min)?;
        write_optional(f, "average", self.average().map(Rounded))?;
        write_optional(f, "max", self.max)
    }
}

/// Floating point counterpart of [`IntSummary`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FloatSummary {
    count: u64,
    sum: f64,
    min: Option<f64>,
    max: Option<f64>,
}

impl FloatSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn sum(&self) -> f64 {
        self.sum
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl Extend<f64> for FloatSummary {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.accept(value);
        }
    }
}

impl FromIterator<f64> for FloatSummary {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut summary = Self::new();
        summary.extend(iter);
        summary
    }
}

impl fmt::Display for FloatSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "count={}, sum={}", self.count, Rounded(self.sum))?;
        write_optional(f, "min", self.min.map(Rounded))?;
        write_optional(f, "average", self.average().map(Rounded))?;
        write_optional(f, "max", self.max.map(Rounded))
    }
}

struct Rounded(f64);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

fn write_optional<T: fmt::Display>(f: &mut fmt::Formatter<'_>, label: &str, value: Option<T>) -> fmt::Result {
    match value {
        Some(v) => write!(f, ", {label}={v}"),
        None => write!(f, ", {label}=-"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_summary_tracks_all_fields() {
        let summary: IntSummary = [29_000u64, 2_800_000, 500].into_iter().collect();

        assert_eq!(summary.count(), 3);
        assert_eq!(summary.sum(), 2_829_500);
        assert_eq!(summary.min(), Some(500));
        assert_eq!(summary.max(), Some(2_800_000));
        let avg = summary.average().unwrap();
        assert!((avg - 2_829_500.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn int_sum_goes_past_u64() {
        let summary: IntSummary = [u64::MAX, 1].into_iter().collect();
        assert_eq!(summary.sum(), u128::from(u64::MAX) + 1);
        assert_eq!(summary.max(), Some(u64::MAX));
        let avg = summary.average().unwrap();
        assert!((avg - 2f64.powi(63)).abs() < 1e6);
    }

    #[test]
    fn empty_summaries_have_no_extrema() {
        let ints = IntSummary::new();
        assert_eq!(ints.count(), 0);
        assert_eq!(ints.min(), None);
        assert_eq!(ints.average(), None);

        let floats = FloatSummary::new();
        assert_eq!(floats.sum(), 0.0);
        assert_eq!(floats.max(), None);
        assert_eq!(floats.average(), None);
    }

    #[test]
    fn float_summary_counts_zero_samples() {
        let summary: FloatSummary = [0.0, 10.0].into_iter().collect();
        assert_eq!(summary.count(), 2);
        assert_eq!(summary.min(), Some(0.0));
        assert_eq!(summary.average(), Some(5.0));
    }

    #[test]
    fn display_is_single_line() {
        let summary: IntSummary = [1u64, 3].into_iter().collect();
        assert_eq!(summary.to_string(), "count=2, sum=4, min=1, average=2.00, max=3");
        assert_eq!(IntSummary::new().to_string(), "count=0, sum=0, min=-, average=-, max=-");
    }
}
