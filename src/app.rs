// src/app.rs
use std::io::{self, Write};

use country_stats_domain::analytics::{FloatSummary, IntSummary};
use country_stats_infra::{BundledCountryRepository, FileCountryRepository};
use country_stats_shared_kernel::{ApplicationError, ErrorContext, Result};
use country_stats_usecase::{CountryManager, queries::listing::NO_CAPITAL};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::Config;
use crate::options::QueryKind;
use crate::presentation::{self, Entry, Report};

/// Loads the data, runs every configured query and writes the reports to stdout.
pub fn run(config: &Config) -> Result<()> {
    let manager = load_manager(config)?;
    let reports = build_reports(&manager, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write(&mut out, &reports, config)
}

pub fn write<W: Write + ?Sized>(out: &mut W, reports: &[Report], config: &Config) -> Result<()> {
    presentation::write_reports(out, reports, config.format)
}

/// Reads the country list once, from `--data` or the bundled dataset.
pub fn load_manager(config: &Config) -> Result<CountryManager> {
    match &config.data {
        Some(path) => {
            let repository = FileCountryRepository::open(path)?;
            CountryManager::from_repository(&repository).with_context(|| format!("loading {}", path.display()))
        }
        None => CountryManager::from_repository(&BundledCountryRepository::new()),
    }
}

pub fn build_reports(manager: &CountryManager, config: &Config) -> Result<Vec<Report>> {
    debug!(countries = manager.len(), queries = config.queries.len(), "running queries");
    config
        .queries
        .iter()
        .map(|&query| evaluate(manager, query, config).map(|entries| Report::new(query, entries)))
        .collect()
}

fn evaluate(manager: &CountryManager, query: QueryKind, config: &Config) -> Result<Vec<Entry>> {
    let region = config.region;
    let entries = match query {
        QueryKind::Names => values(manager.names()),
        QueryKind::Capitals => values(manager.capitals_alphabetical().into_iter().map(|c| c.unwrap_or(NO_CAPITAL))),
        QueryKind::FirstNames => values(manager.first_names(config.first_names_limit)),
        QueryKind::MaxNameLength => vec![Entry::value(manager.max_name_length()?)],
        QueryKind::CapitalsByLength => {
            values(manager.capitals_by_length().into_iter().map(|c| c.unwrap_or(NO_CAPITAL)))
        }
        QueryKind::FirstContaining => values(manager.first_name_containing(&config.needle)),
        QueryKind::SameFirstLast => values(manager.names_with_same_first_and_last_letter()),
        QueryKind::CommaNames => vec![Entry::value(manager.comma_separated_names())],
        QueryKind::LeastPopulous => manager
            .least_populous(config.least_populous_limit)
            .into_iter()
            .map(|c| Entry::pair(c.name(), c.population().value()))
            .collect(),
        QueryKind::TimezoneCounts => manager
            .timezone_counts()
            .into_iter()
            .map(|(name, count)| Entry::pair(name, count))
            .collect(),
        QueryKind::MaxPopulation => vec![Entry::value(manager.max_population().map(u64::from))],
        QueryKind::AveragePopulation => vec![Entry::value(manager.average_population())],
        QueryKind::PopulationStats => int_summary(&manager.population_stats()),
        QueryKind::CountInRegion => vec![Entry::pair(region.as_str(), manager.count_in_region(region))],
        QueryKind::TotalPopulationInRegion => {
            vec![Entry::pair(region.as_str(), manager.total_population_in_region(region)?.value())]
        }
        QueryKind::AveragePopulationInRegion => {
            vec![Entry::pair(region.as_str(), manager.average_population_in_region(region))]
        }
        QueryKind::PopulationsInRegion => {
            values(manager.populations_in_region_desc(region).into_iter().map(u64::from))
        }
        QueryKind::EveryHasTimezone => vec![Entry::value(manager.every_country_has_timezone())],
        QueryKind::DistinctTimezones => vec![Entry::value(manager.distinct_timezone_count())],
        QueryKind::DistinctTimezonesInRegion => values(manager.distinct_timezones_in_region(region)),
        QueryKind::LargestCountry => manager
            .largest_country()
            .into_iter()
            .map(|c| Entry::pair(c.name(), c.area().map(|a| a.to_string())))
            .collect(),
        QueryKind::NullArea => values(manager.names_with_null_area()),
        QueryKind::AreaStats => float_summary(&manager.area_stats(config.area_policy)),
        QueryKind::TotalArea => vec![Entry::value(manager.total_area(config.area_policy)?.to_string())],
        QueryKind::CodeNames => manager
            .code_name_map()
            .into_iter()
            .map(|(code, name)| Entry::pair(code, name))
            .collect(),
        QueryKind::Lookup => lookup(manager, config)?,
        QueryKind::Partition => {
            let split = manager.partition_by_region(region);
            vec![Entry::pair(region.as_str(), split.matching), Entry::pair("other", split.other)]
        }
        QueryKind::CountriesByRegion => manager
            .countries_by_region()
            .into_iter()
            .map(|(r, group)| Entry::pair(r.as_str(), group.iter().map(|c| c.name()).collect::<Vec<_>>()))
            .collect(),
        QueryKind::CountByRegion => manager
            .country_count_by_region()
            .into_iter()
            .map(|(r, count)| Entry::pair(r.as_str(), count))
            .collect(),
        QueryKind::AveragePopulationByRegion => manager
            .average_population_by_region()
            .into_iter()
            .map(|(r, avg)| Entry::pair(r.as_str(), avg))
            .collect(),
        QueryKind::AverageTimezonesByRegion => manager
            .average_timezones_by_region()
            .into_iter()
            .map(|(r, avg)| Entry::pair(r.as_str(), avg))
            .collect(),
        QueryKind::MostPopulousByRegion => manager
            .most_populous_by_region()
            .into_iter()
            .map(|(r, c)| Entry::pair(r.as_str(), c.name()))
            .collect(),
    };
    Ok(entries)
}

fn lookup(manager: &CountryManager, config: &Config) -> Result<Vec<Entry>> {
    let Some(code) = &config.code else {
        return Ok(Vec::new());
    };
    let Some(country) = manager.find_by_code(code.as_str()) else {
        warn!(code = %code, "no country with this code");
        if config.strict {
            return Err(ApplicationError::QueryFailed {
                query: QueryKind::Lookup.to_string(),
                reason: format!("no country with code {code}"),
            }
            .into());
        }
        return Ok(Vec::new());
    };

    Ok(vec![
        Entry::pair("name", country.name()),
        Entry::pair("code", country.code().as_str()),
        Entry::pair("capital", country.capital().unwrap_or(NO_CAPITAL)),
        Entry::pair("population", country.population().value()),
        Entry::pair("area", country.area().map(|a| a.to_string())),
        Entry::pair("region", country.region().as_str()),
        Entry::pair("timezones", country.timezones().to_vec()),
    ])
}

fn values<I>(items: I) -> Vec<Entry>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    items.into_iter().map(Entry::value).collect()
}

fn int_summary(summary: &IntSummary) -> Vec<Entry> {
    vec![
        Entry::pair("count", summary.count()),
        Entry::pair("sum", wide(summary.sum())),
        Entry::pair("min", summary.min()),
        Entry::pair("average", summary.average()),
        Entry::pair("max", summary.max()),
    ]
}

/// JSON number while the value fits in `u64`, decimal string beyond that.
fn wide(value: u128) -> Value {
    u64::try_from(value).map_or_else(|_| Value::String(value.to_string()), Value::from)
}

fn float_summary(summary: &FloatSummary) -> Vec<Entry> {
    vec![
        Entry::pair("count", summary.count()),
        Entry::pair("sum", summary.sum()),
        Entry::pair("min", summary.min()),
        Entry::pair("average", summary.average()),
        Entry::pair("max", summary.max()),
    ]
}
