// crates/shared-kernel/src/value_objects/mod.rs
pub mod area;
pub mod country_code;
pub mod population;

pub use area::Area;
pub use country_code::CountryCode;
pub use population::Population;
