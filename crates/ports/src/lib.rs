//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`repository`]: access to the country records the queries run over
//!
//! The port keeps the domain and application layers independent of where
//! the records come from (bundled data, a file, an in-memory list).

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod repository;

pub use repository::{CountryRecord, CountryRepository};
