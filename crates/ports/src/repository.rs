// crates/ports/src/repository.rs
use country_stats_shared_kernel::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// DTO representing one country as delivered by a repository.
///
/// `region` is free text here; it is validated when converted to the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub capital: Option<String>,
    pub population: u64,
    #[serde(default)]
    pub area: Option<Decimal>,
    pub region: String,
    #[serde(default)]
    pub timezones: Vec<String>,
}

/// Port supplying the full, ordered list of countries.
///
/// Implementations must be side-effect free and return the same list for the
/// duration of a query batch.
pub trait CountryRepository: Send + Sync {
    fn get_all(&self) -> Result<Vec<CountryRecord>>;
}
