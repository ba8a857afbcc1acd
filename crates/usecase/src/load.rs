use country_stats_domain::model::{Country, Region};
use country_stats_ports::repository::{CountryRecord, CountryRepository};
use country_stats_shared_kernel::{
    ApplicationError, Area, CountryCode, DomainResult, ErrorContext, Population, Result,
};
use tracing::debug;

/// Loads the full country list once, in source order.
pub struct LoadCountries<'a> {
    repository: &'a dyn CountryRepository,
}

impl<'a> LoadCountries<'a> {
    pub fn new(repository: &'a dyn CountryRepository) -> Self {
        Self { repository }
    }

    pub fn run(&self) -> Result<Vec<Country>> {
        let records = self.repository.get_all().map_err(|err| ApplicationError::LoadFailed {
            reason: "repository returned an error".to_string(),
            source: Some(Box::new(err)),
        })?;

        let countries = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                let name = record.name.clone();
                record_to_domain(record).with_context(|| format!("invalid country record #{index} ({name})"))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(count = countries.len(), "loaded countries");
        Ok(countries)
    }
}

pub fn record_to_domain(record: CountryRecord) -> DomainResult<Country> {
    let code = CountryCode::parse(&record.code)?;
    let region: Region = record.region.parse()?;

    Ok(Country::builder(record.name, code, region)
        .capital(record.capital)
        .population(Population::new(record.population))
        .area(record.area.map(Area::new))
        .timezones(record.timezones)
        .build())
}
