use std::io::Write;

use country_stats_domain::{
    analytics::{FloatSummary, first_max_by_key},
    model::Country,
    options::AreaNullPolicy,
};
use country_stats_shared_kernel::{Area, DomainError, DomainResult, Result};

use crate::manager::{CountryManager, write_lines};

impl CountryManager {
    /// Largest country by area. Countries without an area are skipped, and on
    /// equal areas the first one wins. `None` when no country has an area.
    pub fn largest_country(&self) -> Option<&Country> {
        first_max_by_key(self.countries().iter().filter(|c| c.area().is_some()), |c| c.area())
    }

    pub fn names_with_null_area(&self) -> Vec<&str> {
        self.countries()
            .iter()
            .filter(|c| c.area().is_none())
            .map(|c| c.name())
            .collect()
    }

    pub fn print_names_with_null_area<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_lines(out, self.names_with_null_area())
    }

    /// Floating point area statistics under `policy`.
    pub fn area_stats(&self, policy: AreaNullPolicy) -> FloatSummary {
        self.areas(policy).map(Area::as_f64).collect()
    }

    /// Exact decimal total. Both policies give the same sum.
    ///
    /// # Errors
    ///
    /// [`DomainError::Overflow`] when the total exceeds the decimal range.
    pub fn total_area(&self, policy: AreaNullPolicy) -> DomainResult<Area> {
        Area::checked_sum(self.areas(policy)).ok_or_else(|| DomainError::Overflow { query: "total_area".to_string() })
    }

    /// Floating point total; may differ from [`Self::total_area`] in the last digits.
    pub fn total_area_f64(&self, policy: AreaNullPolicy) -> f64 {
        self.areas(policy).map(Area::as_f64).sum()
    }

    fn areas(&self, policy: AreaNullPolicy) -> impl Iterator<Item = Area> + '_ {
        self.countries().iter().filter_map(move |c| policy.apply(c.area()))
    }
}
