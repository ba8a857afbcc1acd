use country_stats_shared_kernel::Area;

/// How an absent area takes part in sums, counts and averages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AreaNullPolicy {
    /// Absent areas are left out entirely.
    #[default]
    Exclude,
    /// Absent areas count as `0`: count and average change, the sum does not.
    TreatAsZero,
}

impl AreaNullPolicy {
    #[inline]
    pub fn apply(self, area: Option<Area>) -> Option<Area> {
        match self {
            Self::Exclude => area,
            Self::TreatAsZero => Some(area.unwrap_or(Area::ZERO)),
        }
    }
}

/// Keys a [`SortStrategy`](crate::analytics::SortStrategy) can order countries by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Population,
    TimezoneCount,
    /// Absent capitals always sort last.
    Capital,
    /// Capital length in characters; absent capitals always sort last.
    CapitalLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclude_keeps_absent_area_absent() {
        assert_eq!(AreaNullPolicy::Exclude.apply(None), None);
        assert_eq!(AreaNullPolicy::Exclude.apply(Some(Area::from(5u64))), Some(Area::from(5u64)));
    }

    #[test]
    fn treat_as_zero_fills_absent_area() {
        assert_eq!(AreaNullPolicy::TreatAsZero.apply(None), Some(Area::ZERO));
        assert_eq!(AreaNullPolicy::TreatAsZero.apply(Some(Area::from(5u64))), Some(Area::from(5u64)));
    }
}
