use country_stats_ports::{CountryRecord, CountryRepository};
use country_stats_shared_kernel::Result;

/// Fixed list held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCountryRepository {
    records: Vec<CountryRecord>,
}

impl InMemoryCountryRepository {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<CountryRecord> for InMemoryCountryRepository {
    fn from_iter<I: IntoIterator<Item = CountryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl CountryRepository for InMemoryCountryRepository {
    fn get_all(&self) -> Result<Vec<CountryRecord>> {
        Ok(self.records.clone())
    }
}
