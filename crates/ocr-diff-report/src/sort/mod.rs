//! Client-side table sorting.

mod collation;
mod table_sorter;

pub use collation::natural_cmp;
pub use table_sorter::{SortDirection, TableSorter};
