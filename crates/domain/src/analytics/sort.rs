// domain analytics sorting utilities
use std::cmp::Ordering;

use crate::{model::Country, options::SortKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// One key of a [`SortStrategy`] with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    key: SortKey,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }
}

/// Multi-key ordering of countries.
///
/// Sorting is stable: countries that compare equal on every key keep their
/// source order.
#[derive(Debug, Clone)]
pub struct SortStrategy {
    specs: Vec<SortSpec>,
}

impl SortStrategy {
    pub fn new(specs: Vec<SortSpec>) -> Self {
        Self { specs }
    }

    pub fn by(key: SortKey, order: SortOrder) -> Self {
        Self::new(vec![SortSpec::new(key, order)])
    }

    /// Borrowed countries in sorted order; the input is left untouched.
    pub fn sorted<'a, I>(&self, countries: I) -> Vec<&'a Country>
    where
        I: IntoIterator<Item = &'a Country>,
    {
        let mut refs: Vec<&Country> = countries.into_iter().collect();
        refs.sort_by(|a, b| self.compare(a, b));
        refs
    }

    fn compare(&self, a: &Country, b: &Country) -> Ordering {
        for spec in &self.specs {
            let cmp = spec.key.compare(a, b, spec.order);
            if cmp != Ordering::Equal {
                return cmp;
            }
        }
        Ordering::Equal
    }
}

impl Default for SortStrategy {
    fn default() -> Self {
        Self::by(SortKey::Name, SortOrder::Ascending)
    }
}

impl SortKey {
    /// Compares two countries in `order`. Absent capitals sort last in either order.
    #[inline]
    pub fn compare(&self, a: &Country, b: &Country, order: SortOrder) -> Ordering {
        match self {
            Self::Name => order.apply(a.name().cmp(b.name())),
            Self::Population => order.apply(a.population().cmp(&b.population())),
            Self::TimezoneCount => order.apply(a.timezone_count().cmp(&b.timezone_count())),
            Self::Capital => nulls_last(a.capital(), b.capital(), |x, y| order.apply(x.cmp(y))),
            Self::CapitalLength => nulls_last(a.capital(), b.capital(), |x, y| {
                order.apply(x.chars().count().cmp(&y.chars().count()))
            }),
        }
    }
}

/// Orders present values with `cmp` and puts absent values after all present ones.
pub fn nulls_last<T, F>(a: Option<T>, b: Option<T>, cmp: F) -> Ordering
where
    F: FnOnce(T, T) -> Ordering,
{
    match (a, b) {
        (Some(x), Some(y)) => cmp(x, y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
