// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod repository;

pub use repository::{BundledCountryRepository, DataFormat, FileCountryRepository, InMemoryCountryRepository};
