use std::{fmt, str::FromStr};

use country_stats_shared_kernel::DomainError;
use serde::{Deserialize, Serialize};

/// Continental grouping every country belongs to.
///
/// The declaration order is the key order of every per-region map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
    Polar,
}

impl Region {
    pub const ALL: [Self; 7] = [
        Self::Africa,
        Self::Americas,
        Self::Antarctic,
        Self::Asia,
        Self::Europe,
        Self::Oceania,
        Self::Polar,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "AFRICA",
            Self::Americas => "AMERICAS",
            Self::Antarctic => "ANTARCTIC",
            Self::Asia => "ASIA",
            Self::Europe => "EUROPE",
            Self::Oceania => "OCEANIA",
            Self::Polar => "POLAR",
        }
    }
}

impl FromStr for Region {
    type Err = DomainError;

    /// 大文字小文字を区別しない
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownRegion { value: s.to_string() })
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("europe".parse::<Region>().unwrap(), Region::Europe);
        assert_eq!(" Oceania ".parse::<Region>().unwrap(), Region::Oceania);
        assert_eq!("AMERICAS".parse::<Region>().unwrap(), Region::Americas);
    }

    #[test]
    fn unknown_region_is_an_error() {
        let err = "Atlantis".parse::<Region>().unwrap_err();
        assert!(matches!(err, DomainError::UnknownRegion { ref value } if value == "Atlantis"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for region in Region::ALL {
            assert_eq!(region.to_string().parse::<Region>().unwrap(), region);
        }
    }

    #[test]
    fn ordering_follows_declaration() {
        assert!(Region::Africa < Region::Europe);
        assert!(Region::Europe < Region::Oceania);
    }
}
