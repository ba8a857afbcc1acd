// src/options.rs
use std::fmt;

use clap::ValueEnum;
use serde::{Serialize, Serializer};

/// 出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `# query` 見出し + 1 行 1 値
    #[default]
    Text,
    Json,
    /// `yaml` feature が必要
    Yaml,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum RegionArg {
    Africa,
    Americas,
    Antarctic,
    Asia,
    #[default]
    Europe,
    Oceania,
    Polar,
}

/// 面積が欠損している国の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AreaPolicyArg {
    /// 集計から除外
    #[default]
    Exclude,
    /// 0 として数える
    Zero,
}

/// Queries available from the command line.
///
/// Declaration order is the order used when no query is named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum QueryKind {
    Names,
    Capitals,
    FirstNames,
    MaxNameLength,
    CapitalsByLength,
    FirstContaining,
    SameFirstLast,
    CommaNames,
    LeastPopulous,
    TimezoneCounts,
    MaxPopulation,
    AveragePopulation,
    PopulationStats,
    CountInRegion,
    TotalPopulationInRegion,
    AveragePopulationInRegion,
    PopulationsInRegion,
    EveryHasTimezone,
    DistinctTimezones,
    DistinctTimezonesInRegion,
    LargestCountry,
    NullArea,
    AreaStats,
    TotalArea,
    CodeNames,
    Lookup,
    Partition,
    CountriesByRegion,
    CountByRegion,
    AveragePopulationByRegion,
    AverageTimezonesByRegion,
    MostPopulousByRegion,
}

impl QueryKind {
    /// Every query in run order.
    pub fn all() -> &'static [Self] {
        Self::value_variants()
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

impl Serialize for QueryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
