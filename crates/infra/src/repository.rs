//! Adapters implementing [`CountryRepository`](country_stats_ports::CountryRepository).

pub mod bundled;
pub mod file;
pub mod memory;

use std::path::Path;

use country_stats_ports::CountryRecord;
use country_stats_shared_kernel::{InfrastructureError, Result};

pub use bundled::BundledCountryRepository;
pub use file::FileCountryRepository;
pub use memory::InMemoryCountryRepository;

/// Serialized layout of a country data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
}

impl DataFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(InfrastructureError::UnsupportedFormat { path: path.to_path_buf() }.into()),
        }
    }

    /// Decodes an array of records.
    pub fn parse(self, text: &str) -> Result<Vec<CountryRecord>> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "yaml")]
            Self::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(DataFormat::from_path(Path::new("countries.json")).unwrap(), DataFormat::Json);
        assert_eq!(DataFormat::from_path(Path::new("COUNTRIES.JSON")).unwrap(), DataFormat::Json);
        assert!(DataFormat::from_path(Path::new("countries.csv")).is_err());
        assert!(DataFormat::from_path(Path::new("countries")).is_err());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_extensions() {
        assert_eq!(DataFormat::from_path(Path::new("c.yaml")).unwrap(), DataFormat::Yaml);
        assert_eq!(DataFormat::from_path(Path::new("c.yml")).unwrap(), DataFormat::Yaml);
    }

    #[test]
    fn json_nulls_become_absent() {
        let text = r#"[{"name":"Aland","code":"AX","capital":null,"population":29000,"area":null,"region":"EUROPE","timezones":["Europe/Mariehamn"]}]"#;
        let records = DataFormat::Json.parse(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].capital, None);
        assert_eq!(records[0].area, None);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = DataFormat::Json.parse("[{").unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }
}
