#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod model;
pub mod options;

pub use model::{Country, CountryBuilder, Region};
