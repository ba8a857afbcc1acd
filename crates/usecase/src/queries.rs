//! Query methods of [`crate::CountryManager`], grouped by topic.
//!
//! Every method is a pure function of the loaded list. Methods named
//! `print_*` write the same data line by line to any [`std::io::Write`].

pub mod area;
pub mod listing;
pub mod lookup;
pub mod population;
pub mod regions;
pub mod timezones;
