//! # Sortable
//!
//! Sort collections of structured records by pre-registered, named sort
//! criteria.
//!
//! ## Features
//!
//! - **Registered Criteria**: Each record type declares a fixed list of
//!   reusable [`Sorter`](core::sorter::Sorter)s once; collections resolve
//!   them by label or field key at sort time
//! - **Per-Criterion Direction**: Every criterion carries its own
//!   ascending/descending order
//! - **Priority Overrides**: A criterion can carry a custom comparator that
//!   preempts the field comparison when decisive
//! - **Explicit Tie Semantics**: Comparisons are three-valued; equal values
//!   defer to the next rule instead of faking an order
//! - **Silent Misses**: Looking up an unregistered label or field leaves the
//!   collection untouched
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sortable::prelude::*;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl_sortable!(Person, [
//!     Sorter::ascending("age", |p: &Person| p.age).labeled("youngest"),
//!     Sorter::descending("age", |p: &Person| p.age).labeled("oldest"),
//!     Sorter::ascending("name", |p: &Person| p.name.clone()),
//! ]);
//!
//! let mut people = load_people();
//! people.sort_by_label("oldest");
//! people.sort_by_field("name");
//! ```

pub mod core;
mod macros;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types & Traits ===
    pub use crate::core::{
        order::{Preference, RawOrdered, SortOrder, prefer},
        sortable::{SortByCriterion, Sortable},
        sorter::{Comparator, Sorter},
    };

    // === Macros ===
    pub use crate::impl_sortable;

    // === External dependencies ===
    pub use serde::{Deserialize, Serialize};
}
