// src/config.rs
use std::path::PathBuf;

use country_stats_domain::{Region, options::AreaNullPolicy};
use country_stats_shared_kernel::{CountryCode, PresentationError};
use country_stats_usecase::CountryManager;
use derive_builder::Builder;

use crate::args::Args;
use crate::options::{self, OutputFormat, QueryKind};

/// Immutable run configuration resolved from the command line.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Empty means "no query"; [`TryFrom<Args>`] expands an empty selection to all queries.
    pub queries: Vec<QueryKind>,
    #[builder(default)]
    pub data: Option<PathBuf>,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default = "Region::Europe")]
    pub region: Region,
    #[builder(default = "CountryManager::FIRST_NAMES_DEFAULT")]
    pub first_names_limit: usize,
    #[builder(default = "CountryManager::LEAST_POPULOUS_DEFAULT")]
    pub least_populous_limit: usize,
    #[builder(default)]
    pub area_policy: AreaNullPolicy,
    #[builder(default = "\"island\".to_string()")]
    pub needle: String,
    #[builder(default)]
    pub code: Option<CountryCode>,
    #[builder(default)]
    pub strict: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        let wants_lookup = self.queries.as_ref().is_some_and(|queries| queries.contains(&QueryKind::Lookup));
        if wants_lookup && !matches!(self.code, Some(Some(_))) {
            return Err("query `lookup` requires --code".to_string());
        }
        Ok(())
    }
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        // 省略時は全クエリ。--code が無ければ lookup は飛ばす
        let queries = if args.queries.is_empty() {
            QueryKind::all()
                .iter()
                .copied()
                .filter(|query| *query != QueryKind::Lookup || args.code.is_some())
                .collect()
        } else {
            args.queries
        };

        let region: Region = args.region.into();
        let area_policy: AreaNullPolicy = args.area_policy.into();

        ConfigBuilder::default()
            .queries(queries)
            .data(args.data)
            .format(args.format)
            .region(region)
            .first_names_limit(args.limit.unwrap_or(CountryManager::FIRST_NAMES_DEFAULT))
            .least_populous_limit(args.limit.unwrap_or(CountryManager::LEAST_POPULOUS_DEFAULT))
            .area_policy(area_policy)
            .needle(args.needle)
            .code(args.code)
            .strict(args.strict)
            .build()
            .map_err(|err| PresentationError::ConfigBuildFailed(err.to_string()))
    }
}

// From trait implementations for CLI -> domain enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(
    options::RegionArg,
    Region,
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
    Polar
);

impl From<options::AreaPolicyArg> for AreaNullPolicy {
    fn from(policy: options::AreaPolicyArg) -> Self {
        match policy {
            options::AreaPolicyArg::Exclude => Self::Exclude,
            options::AreaPolicyArg::Zero => Self::TreatAsZero,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    fn config(argv: &[&str]) -> Result<Config, PresentationError> {
        let mut full = vec!["country_stats"];
        full.extend_from_slice(argv);
        Config::try_from(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn no_query_runs_everything_but_lookup() {
        let config = config(&[]).unwrap();
        assert_eq!(config.queries.len(), QueryKind::all().len() - 1);
        assert!(!config.queries.contains(&QueryKind::Lookup));
        assert_eq!(config.region, Region::Europe);
        assert_eq!(config.first_names_limit, 5);
        assert_eq!(config.least_populous_limit, 10);
    }

    #[test]
    fn code_enables_lookup_in_full_run() {
        let config = config(&["--code", "HU"]).unwrap();
        assert_eq!(config.queries, QueryKind::all().to_vec());
    }

    #[test]
    fn explicit_lookup_without_code_fails() {
        let err = config(&["lookup"]).unwrap_err();
        assert!(matches!(err, PresentationError::ConfigBuildFailed(_)));
        assert!(err.to_string().contains("--code"));
    }

    #[test]
    fn limit_overrides_both_defaults() {
        let config = config(&["first-names", "--limit", "2"]).unwrap();
        assert_eq!(config.queries, vec![QueryKind::FirstNames]);
        assert_eq!(config.first_names_limit, 2);
        assert_eq!(config.least_populous_limit, 2);
    }

    #[test]
    fn cli_enums_map_to_domain() {
        let config = config(&["--region", "antarctic", "--area-policy", "zero"]).unwrap();
        assert_eq!(config.region, Region::Antarctic);
        assert_eq!(config.area_policy, AreaNullPolicy::TreatAsZero);
    }

    #[test]
    fn builder_requires_queries() {
        assert!(ConfigBuilder::default().build().is_err());
    }
}
