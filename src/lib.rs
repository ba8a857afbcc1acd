// src/lib.rs
//! # country_stats
//!
//! Command line front end over the query workspace: argument parsing,
//! configuration, report rendering and logging setup.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
