use std::collections::BTreeMap;

use country_stats_domain::model::Country;
use tracing::warn;

use crate::manager::CountryManager;

impl CountryManager {
    /// `code -> name`. A repeated code keeps the last record and logs a warning.
    pub fn code_name_map(&self) -> BTreeMap<&str, &str> {
        self.country_map()
            .into_iter()
            .map(|(code, country)| (code, country.name()))
            .collect()
    }

    /// `code -> country`. A repeated code keeps the last record and logs a warning.
    pub fn country_map(&self) -> BTreeMap<&str, &Country> {
        let mut map = BTreeMap::new();
        for country in self.countries() {
            if let Some(previous) = map.insert(country.code().as_str(), country) {
                warn!(
                    code = %country.code(),
                    replaced = previous.name(),
                    by = country.name(),
                    "duplicate country code"
                );
            }
        }
        map
    }

    /// Same record [`Self::country_map`] would return for `code`.
    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.countries().iter().rev().find(|c| c.code().as_str() == code)
    }
}
