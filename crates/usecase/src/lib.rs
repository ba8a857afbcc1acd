//! # Use Cases
//!
//! Application-level logic over the loaded country list.
//!
//! - [`load`]: pulls records through the repository port and converts them to domain values
//! - [`manager`]: [`CountryManager`], the query component
//! - [`queries`]: the query methods, grouped by topic
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod load;
pub mod manager;
pub mod queries;

pub use load::{LoadCountries, record_to_domain};
pub use manager::CountryManager;
