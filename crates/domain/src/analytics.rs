//! Pure folds over a borrowed country list.

pub mod aggregate;
pub mod sort;
pub mod summary;

pub use aggregate::{Partition, RegionAggregator, first_max_by_key};
pub use sort::{SortOrder, SortSpec, SortStrategy, nulls_last};
pub use summary::{FloatSummary, IntSummary};

pub use crate::options::SortKey;
