use std::io::Write;

use country_stats_domain::{
    analytics::{SortOrder, SortSpec, SortStrategy},
    options::SortKey,
};
use country_stats_shared_kernel::{DomainError, DomainResult, Result};

use crate::manager::{CountryManager, write_lines};

/// Printed in place of an absent capital.
pub const NO_CAPITAL: &str = "(no capital)";

impl CountryManager {
    /// Names in source order.
    pub fn names(&self) -> Vec<&str> {
        self.countries().iter().map(|c| c.name()).collect()
    }

    pub fn print_names<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_lines(out, self.names())
    }

    /// Capitals ascending, absent capitals last.
    pub fn capitals_alphabetical(&self) -> Vec<Option<&str>> {
        SortStrategy::by(SortKey::Capital, SortOrder::Ascending)
            .sorted(self.countries())
            .into_iter()
            .map(|c| c.capital())
            .collect()
    }

    pub fn print_capitals_alphabetical<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_lines(out, self.capitals_alphabetical().into_iter().map(|c| c.unwrap_or(NO_CAPITAL)))
    }

    /// Capitals by length (in characters), then alphabetically; absent capitals last.
    pub fn capitals_by_length(&self) -> Vec<Option<&str>> {
        SortStrategy::new(vec![SortSpec::ascending(SortKey::CapitalLength), SortSpec::ascending(SortKey::Capital)])
            .sorted(self.countries())
            .into_iter()
            .map(|c| c.capital())
            .collect()
    }

    pub fn print_capitals_by_length<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_lines(out, self.capitals_by_length().into_iter().map(|c| c.unwrap_or(NO_CAPITAL)))
    }

    /// The first `n` names in source order.
    pub fn first_names(&self, n: usize) -> Vec<&str> {
        self.countries().iter().take(n).map(|c| c.name()).collect()
    }

    pub fn print_first_names<W: Write + ?Sized>(&self, out: &mut W, n: usize) -> Result<()> {
        write_lines(out, self.first_names(n))
    }

    /// Length of the longest name, counted in characters.
    ///
    /// # Errors
    ///
    /// [`DomainError::EmptyDataset`] when there are no countries.
    pub fn max_name_length(&self) -> DomainResult<usize> {
        self.countries()
            .iter()
            .map(|c| c.name().chars().count())
            .max()
            .ok_or_else(|| DomainError::EmptyDataset { query: "max_name_length".to_string() })
    }

    /// First name containing `needle`, ignoring case.
    pub fn first_name_containing(&self, needle: &str) -> Option<&str> {
        let needle = needle.to_lowercase();
        self.countries()
            .iter()
            .map(|c| c.name())
            .find(|name| name.to_lowercase().contains(&needle))
    }

    pub fn first_name_containing_island(&self) -> Option<&str> {
        self.first_name_containing("island")
    }

    /// Names whose first and last characters match, ignoring case.
    ///
    /// Single-character names qualify; empty names never do.
    pub fn names_with_same_first_and_last_letter(&self) -> Vec<&str> {
        self.countries()
            .iter()
            .map(|c| c.name())
            .filter(|name| same_first_and_last_letter(name))
            .collect()
    }

    pub fn print_names_with_same_first_and_last_letter<W: Write + ?Sized>(&self, out: &mut W) -> Result<()> {
        write_lines(out, self.names_with_same_first_and_last_letter())
    }

    /// All names sorted ascending and joined with `,`.
    pub fn comma_separated_names(&self) -> String {
        SortStrategy::default()
            .sorted(self.countries())
            .into_iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn same_first_and_last_letter(name: &str) -> bool {
    let lower = name.to_lowercase();
    match (lower.chars().next(), lower.chars().next_back()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}
