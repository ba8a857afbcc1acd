// src/parsers.rs
use std::{fmt::Display, str::FromStr};

use country_stats_shared_kernel::CountryCode;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .trim()
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse a non-blank country code; surrounding whitespace is dropped.
///
/// # Errors
/// Returns an error if the input is empty or whitespace only.
pub fn parse_country_code(s: &str) -> Result<CountryCode, String> {
    CountryCode::parse(s).map_err(|err| err.to_string())
}
