use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Country, Region};

/// Two-way split of a country list; both sides are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub matching: usize,
    pub other: usize,
}

impl Partition {
    pub fn total(&self) -> usize {
        self.matching + self.other
    }
}

/// Running mean used as a per-region accumulator.
#[derive(Debug, Clone, Copy, Default)]
struct Mean {
    count: u64,
    total: f64,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.count += 1;
        self.total += value;
    }

    #[allow(clippy::cast_precision_loss)]
    fn value(self) -> f64 {
        if self.count == 0 { 0.0 } else { self.total / self.count as f64 }
    }
}

/// Fold-by-region aggregations.
///
/// Each function folds the list once into a `Region -> accumulator` map. The
/// key set is exactly the set of regions present in the input.
pub struct RegionAggregator;

impl RegionAggregator {
    /// Generic fold: `step` is called with the region's accumulator for every country, in source order.
    pub fn fold<'a, A, F>(countries: &'a [Country], mut step: F) -> BTreeMap<Region, A>
    where
        A: Default,
        F: FnMut(&mut A, &'a Country),
    {
        let mut map: BTreeMap<Region, A> = BTreeMap::new();
        for country in countries {
            let acc = map.entry(country.region()).or_default();
            step(acc, country);
        }
        map
    }

    pub fn group(countries: &[Country]) -> BTreeMap<Region, Vec<&Country>> {
        Self::fold::<Vec<&Country>, _>(countries, |group, country| group.push(country))
    }

    pub fn count(countries: &[Country]) -> BTreeMap<Region, usize> {
        Self::fold::<usize, _>(countries, |count, _| *count += 1)
    }

    pub fn average<F>(countries: &[Country], value_fn: F) -> BTreeMap<Region, f64>
    where
        F: Fn(&Country) -> f64,
    {
        Self::fold::<Mean, _>(countries, |mean, country| mean.push(value_fn(country)))
            .into_iter()
            .map(|(region, mean)| (region, mean.value()))
            .collect()
    }

    /// Per-region maximum by `key_fn`. On equal keys the first country encountered is kept.
    pub fn max_by_key<K, F>(countries: &[Country], key_fn: F) -> BTreeMap<Region, &Country>
    where
        K: Ord,
        F: Fn(&Country) -> K,
    {
        let mut best: BTreeMap<Region, &Country> = BTreeMap::new();
        for country in countries {
            best.entry(country.region())
                .and_modify(|current| {
                    if key_fn(country) > key_fn(*current) {
                        *current = country;
                    }
                })
                .or_insert(country);
        }
        best
    }

    pub fn partition<P>(countries: &[Country], predicate: P) -> Partition
    where
        P: Fn(&Country) -> bool,
    {
        countries.iter().fold(Partition::default(), |mut acc, country| {
            if predicate(country) {
                acc.matching += 1;
            } else {
                acc.other += 1;
            }
            acc
        })
    }
}

/// Maximum of `items` by `key_fn`, keeping the first of equal maxima.
///
/// `Iterator::max_by_key` keeps the last one instead.
pub fn first_max_by_key<T, K, I, F>(items: I, key_fn: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    F: Fn(&T) -> K,
{
    items.into_iter().fold(None, |best, item| match best {
        Some(current) if key_fn(&item) <= key_fn(&current) => Some(current),
        _ => Some(item),
    })
}
