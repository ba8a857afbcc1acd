use std::{fmt::Display, io::Write};

use country_stats_domain::model::{Country, Region};
use country_stats_ports::repository::CountryRepository;
use country_stats_shared_kernel::Result;

use crate::load::LoadCountries;

/// Query component over a fixed, already loaded list of countries.
///
/// The list is never mutated after construction; every query is a single
/// pass (or a sort) over it. Query methods live in [`crate::queries`].
#[derive(Debug, Clone, Default)]
pub struct CountryManager {
    countries: Vec<Country>,
}

impl CountryManager {
    pub const FIRST_NAMES_DEFAULT: usize = 5;
    pub const LEAST_POPULOUS_DEFAULT: usize = 10;

    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Loads the list through `repository` once.
    pub fn from_repository(repository: &dyn CountryRepository) -> Result<Self> {
        LoadCountries::new(repository).run().map(Self::new)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub(crate) fn in_region(&self, region: Region) -> impl Iterator<Item = &Country> + '_ {
        self.countries.iter().filter(move |country| country.in_region(region))
    }
}

/// Writes one value per line.
pub(crate) fn write_lines<W, I>(out: &mut W, lines: I) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Writes `name: value` lines.
pub(crate) fn write_pairs<W, I, K, V>(out: &mut W, pairs: I) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    for (key, value) in pairs {
        writeln!(out, "{key}: {value}")?;
    }
    Ok(())
}
