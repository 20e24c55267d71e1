//! The `Sortable` capability and in-place collection sort operations

use crate::core::sorter::Sorter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Capability trait for record types that can be sorted by registered criteria.
///
/// An adopting type declares a fixed, ordered list of [`Sorter`]s once; the
/// list is process-wide, read-only metadata and every sort operation resolves
/// against it. The serde bounds carry the structured encode/decode capability
/// expected of record types; the sorting logic itself never serializes
/// anything.
///
/// The [`impl_sortable!`](crate::impl_sortable) macro generates the
/// implementation together with the lazily initialized static list.
///
/// # Example
/// ```rust,ignore
/// #[derive(Serialize, Deserialize)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl_sortable!(Person, [
///     Sorter::ascending("age", |p: &Person| p.age).labeled("youngest"),
///     Sorter::ascending("name", |p: &Person| p.name.clone()),
/// ]);
///
/// people.sort_by_label("youngest");
/// ```
pub trait Sortable: Serialize + DeserializeOwned + Sized + 'static {
    /// The type's registered sort criteria, in declaration order
    fn sorters() -> &'static [Sorter<Self>];

    /// First registered criterion carrying the given label
    fn sorter_for_label(label: &str) -> Option<&'static Sorter<Self>> {
        Self::sorters().iter().find(|s| s.label() == Some(label))
    }

    /// First registered criterion reading the given field key
    fn sorter_for_field(field: &str) -> Option<&'static Sorter<Self>> {
        Self::sorters().iter().find(|s| s.field() == field)
    }
}

/// In-place sort operations over sequences of [`Sortable`] records.
///
/// Implemented for `[T]`, so available on slices and `Vec<T>` alike. Lookup
/// misses are silent no-ops: the only observable signal is that the
/// collection's order did not change.
pub trait SortByCriterion<T: Sortable> {
    /// Sort by the first registered criterion with this label; no-op if none
    fn sort_by_label(&mut self, label: &str);

    /// Sort by the first registered criterion on this field key; no-op if none
    fn sort_by_field(&mut self, field: &str);

    /// Sort by an already-resolved criterion; no-op when absent
    fn sort_by_sorter(&mut self, sorter: Option<&Sorter<T>>);

    /// Sort with an explicit criterion.
    ///
    /// Each pair runs through the criterion's rule chain (priority comparator
    /// first, then the field comparison). Pairs neither rule distinguishes
    /// are tied; their final relative order is whatever the standard sort
    /// produces and should be treated as unspecified.
    fn sort_using(&mut self, sorter: &Sorter<T>);
}

impl<T: Sortable> SortByCriterion<T> for [T] {
    fn sort_by_label(&mut self, label: &str) {
        let sorter = T::sorter_for_label(label);
        if sorter.is_none() {
            debug!(label, "no sort criterion registered under label; collection unchanged");
        }
        self.sort_by_sorter(sorter);
    }

    fn sort_by_field(&mut self, field: &str) {
        let sorter = T::sorter_for_field(field);
        if sorter.is_none() {
            debug!(field, "no sort criterion registered on field; collection unchanged");
        }
        self.sort_by_sorter(sorter);
    }

    fn sort_by_sorter(&mut self, sorter: Option<&Sorter<T>>) {
        if let Some(sorter) = sorter {
            self.sort_using(sorter);
        }
    }

    fn sort_using(&mut self, sorter: &Sorter<T>) {
        self.sort_by(|a, b| sorter.ordering(a, b));
    }
}
