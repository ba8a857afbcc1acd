use country_stats_ports::{CountryRecord, CountryRepository};
use country_stats_shared_kernel::{ErrorContext, Result};
use tracing::debug;

use super::DataFormat;

const BUNDLED_COUNTRIES: &str = include_str!("../../data/countries.json");

/// Dataset compiled into the binary; used when no data file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledCountryRepository;

impl BundledCountryRepository {
    pub fn new() -> Self {
        Self
    }
}

impl CountryRepository for BundledCountryRepository {
    fn get_all(&self) -> Result<Vec<CountryRecord>> {
        let records = DataFormat::Json.parse(BUNDLED_COUNTRIES).context("bundled country dataset")?;
        debug!(count = records.len(), "read bundled dataset");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let records = BundledCountryRepository::new().get_all().unwrap();
        assert!(records.len() > 20);
        assert!(records.iter().any(|r| r.area.is_none()));
        assert!(records.iter().any(|r| r.capital.is_none()));
        assert!(records.iter().all(|r| !r.code.trim().is_empty()));
    }
}
