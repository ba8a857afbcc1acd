use std::io::Write;

use country_stats_domain::{
    analytics::{IntSummary, SortOrder, SortStrategy},
    model::{Country, Region},
    options::SortKey,
};
use country_stats_shared_kernel::{DomainError, DomainResult, Population, Result};

use crate::manager::{CountryManager, write_lines, write_pairs};

impl CountryManager {
    /// `None` for an empty list.
    pub fn max_population(&self) -> Option<Population> {
        self.countries().iter().map(Country::population).max()
    }

    /// `None` for an empty list.
    pub fn average_population(&self) -> Option<f64> {
        self.population_stats().average()
    }

    pub fn population_stats(&self) -> IntSummary {
        self.countries().iter().map(|c| c.population().value()).collect()
    }

    /// Number of countries whose region is exactly `region`.
    pub fn count_in_region(&self, region: Region) -> usize {
        self.in_region(region).count()
    }

    /// # Errors
    ///
    /// [`DomainError::Overflow`] when the total does not fit in `u64`.
    pub fn total_population_in_region(&self, region: Region) -> DomainResult<Population> {
        Population::checked_sum(self.in_region(region).map(Country::population))
            .ok_or_else(|| DomainError::Overflow { query: "total_population_in_region".to_string() })
    }

    /// `None` when no country belongs to `region`.
    pub fn average_population_in_region(&self, region: Region) -> Option<f64> {
        self.in_region(region)
            .map(|c| c.population().value())
            .collect::<IntSummary>()
            .average()
    }

    /// Populations of `region`, largest first; equal values are all kept.
    pub fn populations_in_region_desc(&self, region: Region) -> Vec<Population> {
        SortStrategy::by(SortKey::Population, SortOrder::Descending)
            .sorted(self.in_region(region))
            .into_iter()
            .map(Country::population)
            .collect()
    }

    pub fn print_populations_in_region_desc<W: Write + ?Sized>(&self, out: &mut W, region: Region) -> Result<()> {
        write_lines(out, self.populations_in_region_desc(region))
    }

    /// The `n` least populous countries, ascending; ties keep source order.
    pub fn least_populous(&self, n: usize) -> Vec<&Country> {
        let mut sorted = SortStrategy::by(SortKey::Population, SortOrder::Ascending).sorted(self.countries());
        sorted.truncate(n);
        sorted
    }

    /// `name: population` lines.
    pub fn print_least_populous<W: Write + ?Sized>(&self, out: &mut W, n: usize) -> Result<()> {
        write_pairs(out, self.least_populous(n).into_iter().map(|c| (c.name(), c.population())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::fixtures::{aland_albania, printed, sample};

    #[test]
    fn max_population_of_example() {
        assert_eq!(aland_albania().max_population(), Some(Population::new(2_800_000)));
        assert_eq!(CountryManager::default().max_population(), None);
    }

    #[test]
    fn population_stats_of_sample() {
        let stats = sample().population_stats();
        assert_eq!(stats.count(), 10);
        assert_eq!(stats.sum(), 165_707_000);
        assert_eq!(stats.min(), Some(0));
        assert_eq!(stats.max(), Some(125_800_000));

        let avg = sample().average_population().unwrap();
        assert!((avg - 16_570_700.0).abs() < 1e-6);
        assert_eq!(CountryManager::default().average_population(), None);
    }

    #[test]
    fn region_filters_use_exact_match() {
        let manager = sample();
        assert_eq!(manager.count_in_region(Region::Europe), 4);
        assert_eq!(manager.count_in_region(Region::Africa), 0);
        assert_eq!(manager.total_population_in_region(Region::Europe).unwrap(), Population::new(12_606_000));
        assert_eq!(manager.total_population_in_region(Region::Africa).unwrap(), Population::ZERO);
    }

    #[test]
    fn population_totals_past_u64_do_not_wrap() {
        let manager = CountryManager::new(vec![
            crate::queries::fixtures::country("Big", "BG", None, u64::MAX, None, Region::Asia, &[]),
            crate::queries::fixtures::country("One", "ON", None, 1, None, Region::Asia, &[]),
        ]);

        let stats = manager.population_stats();
        assert_eq!(stats.sum(), u128::from(u64::MAX) + 1);
        assert_eq!(stats.max(), Some(u64::MAX));

        let err = manager.total_population_in_region(Region::Asia).unwrap_err();
        assert!(matches!(err, DomainError::Overflow { .. }));
        assert!(manager.average_population_in_region(Region::Asia).is_some());
    }

    #[test]
    fn average_in_region_is_total_over_count() {
        let manager = sample();
        let avg = manager.average_population_in_region(Region::Europe).unwrap();
        assert!((avg - 3_151_500.0).abs() < 1e-6);
        assert_eq!(manager.average_population_in_region(Region::Africa), None);
    }

    #[test]
    fn populations_in_region_descending_keep_duplicates() {
        let manager = sample();
        let values: Vec<u64> =
            manager.populations_in_region_desc(Region::Europe).into_iter().map(u64::from).collect();
        assert_eq!(values, vec![9_700_000, 2_800_000, 77_000, 29_000]);

        let twins = CountryManager::new(vec![
            crate::queries::fixtures::country("A", "A", None, 5, None, Region::Asia, &[]),
            crate::queries::fixtures::country("B", "B", None, 5, None, Region::Asia, &[]),
        ]);
        assert_eq!(twins.populations_in_region_desc(Region::Asia).len(), 2);
    }

    #[test]
    fn least_populous_ascending() {
        let manager = sample();
        let names: Vec<&str> = manager.least_populous(3).iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Bouvet Island", "Antarctica", "Aland Islands"]);
        assert_eq!(manager.least_populous(CountryManager::LEAST_POPULOUS_DEFAULT).len(), 10);
    }

    #[test]
    fn print_least_populous_formats_pairs() {
        let manager = sample();
        let lines = printed(|out| manager.print_least_populous(out, 2));
        assert_eq!(lines, vec!["Bouvet Island: 0", "Antarctica: 1000"]);
    }

    #[test]
    fn print_populations_one_per_line() {
        let manager = aland_albania();
        let lines = printed(|out| manager.print_populations_in_region_desc(out, Region::Europe));
        assert_eq!(lines, vec!["2800000", "29000"]);
    }
}
