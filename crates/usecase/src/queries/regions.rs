use std::collections::BTreeMap;

use country_stats_domain::{
    analytics::{Partition, RegionAggregator},
    model::{Country, Region},
};

use crate::manager::CountryManager;

impl CountryManager {
    /// Countries in `region` versus all others.
    pub fn partition_by_region(&self, region: Region) -> Partition {
        RegionAggregator::partition(self.countries(), |c| c.in_region(region))
    }

    pub fn europe_partition(&self) -> Partition {
        self.partition_by_region(Region::Europe)
    }

    /// Source order is kept inside each group.
    pub fn countries_by_region(&self) -> BTreeMap<Region, Vec<&Country>> {
        RegionAggregator::group(self.countries())
    }

    pub fn country_count_by_region(&self) -> BTreeMap<Region, usize> {
        RegionAggregator::count(self.countries())
    }

    pub fn average_population_by_region(&self) -> BTreeMap<Region, f64> {
        RegionAggregator::average(self.countries(), |c| c.population().as_f64())
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn average_timezones_by_region(&self) -> BTreeMap<Region, f64> {
        RegionAggregator::average(self.countries(), |c| c.timezone_count() as f64)
    }

    /// Most populous country of every region present. Groups are never empty,
    /// so each region maps straight to a record; on equal population the first
    /// country encountered wins.
    pub fn most_populous_by_region(&self) -> BTreeMap<Region, &Country> {
        RegionAggregator::max_by_key(self.countries(), Country::population)
    }
}
