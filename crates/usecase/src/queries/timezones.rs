use std::{collections::HashSet, io::Write};

use country_stats_domain::{
    analytics::{SortOrder, SortStrategy},
    model::Region,
    options::SortKey,
};
use country_stats_shared_kernel::Result;
use indexmap::IndexSet;

use crate::manager::{CountryManager, write_lines, write_pairs};

impl CountryManager {
    /// True iff every country lists at least one timezone (vacuously true when empty).
    pub fn every_country_has_timezone(&self) -> bool {
        self.countries().iter().all(|c| c.timezone_count() > 0)
    }

    /// Number of distinct timezone identifiers (case-sensitive).
    pub fn distinct_timezone_count(&self) -> usize {
        self.countries()
            .iter()
            .flat_map(|c| c.timezones())
            .map(String::as_str)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Distinct timezones of `region` in first-seen order.
    pub fn distinct_timezones_in_region(&self, region: Region) -> Vec<&str> {
        self.in_region(region)
            .flat_map(|c| c.timezones())
            .map(String::as_str)
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn print_distinct_timezones_in_region<W: Write + ?Sized>(&self, out: &mut W, region: Region) -> Result<()> {
        write_lines(out, self.distinct_timezones_in_region(region))
    }

    /// Every country with its timezone count, ascending; ties keep source order.
    pub fn timezone_counts(&self) -> Vec<(&str, usize)> {
        SortStrategy::by(SortKey::TimezoneCount, SortOrder::Ascending)
            .sorted(self.countries())
            .into_iter()
            .map(|c| (c.name(), c.timezone_count()))
            .collect()
    }

    /// `name: count` lines.
    pub fn print_timezone_counts<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_pairs(out, self.timezone_counts())
    }
}
