use country_stats_shared_kernel::{Area, CountryCode, Population};
use serde::{Deserialize, Serialize};

use crate::model::Region;

/// 国レコード (読み取り専用)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    name: String,
    code: CountryCode,
    capital: Option<String>,
    population: Population,
    area: Option<Area>,
    region: Region,
    #[serde(default)]
    timezones: Vec<String>,
}

impl Country {
    pub fn builder(name: impl Into<String>, code: CountryCode, region: Region) -> CountryBuilder {
        CountryBuilder::new(name, code, region)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref()
    }

    pub fn population(&self) -> Population {
        self.population
    }

    pub fn area(&self) -> Option<Area> {
        self.area
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn timezones(&self) -> &[String] {
        &self.timezones
    }

    pub fn timezone_count(&self) -> usize {
        self.timezones.len()
    }

    pub fn in_region(&self, region: Region) -> bool {
        self.region == region
    }
}

/// Builder for [`Country`]; population defaults to zero, optional fields to absent.
#[derive(Debug, Clone)]
pub struct CountryBuilder {
    name: String,
    code: CountryCode,
    capital: Option<String>,
    population: Population,
    area: Option<Area>,
    region: Region,
    timezones: Vec<String>,
}

impl CountryBuilder {
    pub fn new(name: impl Into<String>, code: CountryCode, region: Region) -> Self {
        Self {
            name: name.into(),
            code,
            capital: None,
            population: Population::ZERO,
            area: None,
            region,
            timezones: Vec::new(),
        }
    }

    pub fn capital(mut self, capital: Option<String>) -> Self {
        self.capital = capital;
        self
    }

    pub fn population(mut self, population: Population) -> Self {
        self.population = population;
        self
    }

    pub fn area(mut self, area: Option<Area>) -> Self {
        self.area = area;
        self
    }

    pub fn timezones<I, S>(mut self, timezones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.timezones = timezones.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Country {
        Country {
            name: self.name,
            code: self.code,
            capital: self.capital,
            population: self.population,
            area: self.area,
            region: self.region,
            timezones: self.timezones,
        }
    }
}
