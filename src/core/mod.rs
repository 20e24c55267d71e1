//! Core module containing the comparison primitives, criteria, and sort operations

pub mod order;
pub mod sortable;
pub mod sorter;

pub use order::{Preference, RawOrdered, SortOrder, prefer};
pub use sortable::{SortByCriterion, Sortable};
pub use sorter::{Comparator, Sorter};
