pub mod country;
pub mod region;

pub use country::{Country, CountryBuilder};
pub use region::Region;
