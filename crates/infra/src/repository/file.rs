use std::path::{Path, PathBuf};

use country_stats_ports::{CountryRecord, CountryRepository};
use country_stats_shared_kernel::{ErrorContext, Result};
use tracing::debug;

use super::DataFormat;
use crate::persistence::FileReader;

/// Reads the country list from a JSON (or YAML) file on every call.
#[derive(Debug, Clone)]
pub struct FileCountryRepository {
    path: PathBuf,
    format: DataFormat,
}

impl FileCountryRepository {
    /// Format inferred from the extension.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = DataFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    pub fn with_format(path: impl Into<PathBuf>, format: DataFormat) -> Self {
        Self { path: path.into(), format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> DataFormat {
        self.format
    }
}

impl CountryRepository for FileCountryRepository {
    fn get_all(&self) -> Result<Vec<CountryRecord>> {
        let text = FileReader::read_to_string(&self.path)?;
        let records = self
            .format
            .parse(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        debug!(path = %self.path.display(), format = ?self.format, count = records.len(), "read data file");
        Ok(records)
    }
}
