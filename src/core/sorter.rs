//! Sort criteria: reusable, named ordering rules for a record type

use crate::core::order::{Preference, SortOrder, prefer};
use std::cmp::Ordering;
use std::fmt;

/// Pairwise comparison over two records of the same type.
///
/// Returns [`Preference::NoPreference`] when the rule cannot distinguish the
/// pair, deferring to the next rule in the chain.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Preference + Send + Sync>;

/// One reusable sort strategy for a record type `T`.
///
/// A `Sorter` binds a field of `T` to a direction, an optional lookup label,
/// and an optional priority comparator consulted before the field comparison.
/// The field comparison itself is synthesized once at construction and never
/// changes afterwards.
///
/// Sorters are meant to be long-lived: a type registers its criteria once
/// (see [`Sortable::sorters`](crate::core::sortable::Sortable::sorters)) and
/// every sort operation resolves against that shared list.
///
/// # Example
/// ```rust,ignore
/// let by_age = Sorter::ascending("age", |p: &Person| p.age).labeled("by_age");
/// let newest = Sorter::descending("created_at", |p: &Person| p.created_at);
/// ```
pub struct Sorter<T: 'static> {
    field: &'static str,
    order: SortOrder,
    label: Option<&'static str>,
    priority: Option<Comparator<T>>,
    comparison: Comparator<T>,
}

impl<T> Sorter<T> {
    /// Create a criterion on a totally ordered field.
    ///
    /// `field` is the stable key identifying which field the accessor reads;
    /// lookups by field match on this key. The comparison function is derived
    /// here by closing over the accessor and the direction.
    pub fn new<U, F>(field: &'static str, accessor: F, order: SortOrder) -> Self
    where
        U: Ord,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        Self {
            field,
            order,
            label: None,
            priority: None,
            comparison: Box::new(move |a, b| prefer(&accessor(a), &accessor(b), order)),
        }
    }

    /// Create an ascending criterion (the default direction)
    pub fn ascending<U, F>(field: &'static str, accessor: F) -> Self
    where
        U: Ord,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        Self::new(field, accessor, SortOrder::Ascending)
    }

    /// Create a descending criterion
    pub fn descending<U, F>(field: &'static str, accessor: F) -> Self
    where
        U: Ord,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        Self::new(field, accessor, SortOrder::Descending)
    }

    /// Attach a lookup label to this criterion
    pub fn labeled(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    /// Attach a priority comparator.
    ///
    /// When present, it is evaluated before the field comparison for every
    /// pair; a decisive result preempts the field comparison entirely.
    /// Decisive results should be antisymmetric, otherwise the final order of
    /// the affected elements is unspecified.
    pub fn with_priority<P>(mut self, priority: P) -> Self
    where
        P: Fn(&T, &T) -> Preference + Send + Sync + 'static,
    {
        self.priority = Some(Box::new(priority));
        self
    }

    /// The key of the field this criterion reads
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The direction this criterion sorts in
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// The lookup label, if one was attached
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Evaluate the full rule chain for one pair: priority comparator first
    /// if present, then the field comparison.
    pub fn evaluate(&self, a: &T, b: &T) -> Preference {
        let field_comparison = || (self.comparison)(a, b);
        match &self.priority {
            Some(priority) => priority(a, b).or_else(field_comparison),
            None => field_comparison(),
        }
    }

    /// Evaluate the rule chain and lower the result for the standard sort.
    /// A pair neither rule can distinguish comes out `Equal`.
    pub fn ordering(&self, a: &T, b: &T) -> Ordering {
        self.evaluate(a, b).into_ordering()
    }
}

impl<T> fmt::Debug for Sorter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sorter")
            .field("field", &self.field)
            .field("order", &self.order)
            .field("label", &self.label)
            .field("has_priority", &self.priority.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Person {
        age: u32,
        vip: bool,
    }

    #[test]
    fn test_comparison_derived_from_accessor_and_order() {
        let young = Person { age: 20, vip: false };
        let old = Person { age: 30, vip: false };

        let by_age = Sorter::ascending("age", |p: &Person| p.age);
        assert_eq!(by_age.evaluate(&young, &old), Preference::Before);
        assert_eq!(by_age.evaluate(&old, &young), Preference::After);

        let by_age_desc = Sorter::descending("age", |p: &Person| p.age);
        assert_eq!(by_age_desc.evaluate(&young, &old), Preference::After);
    }

    #[test]
    fn test_equal_fields_yield_no_preference() {
        let a = Person { age: 25, vip: true };
        let b = Person { age: 25, vip: false };

        let by_age = Sorter::ascending("age", |p: &Person| p.age);
        assert_eq!(by_age.evaluate(&a, &b), Preference::NoPreference);
    }

    #[test]
    fn test_decisive_priority_preempts_field_comparison() {
        let vip = Person { age: 50, vip: true };
        let regular = Person { age: 20, vip: false };

        let by_age = Sorter::ascending("age", |p: &Person| p.age).with_priority(|a, b| {
            prefer(&b.vip, &a.vip, SortOrder::Ascending)
        });

        // Field comparison alone would put the 20-year-old first.
        assert_eq!(by_age.evaluate(&vip, &regular), Preference::Before);
        assert_eq!(by_age.evaluate(&regular, &vip), Preference::After);
    }

    #[test]
    fn test_indecisive_priority_falls_through() {
        let a = Person { age: 20, vip: true };
        let b = Person { age: 30, vip: true };

        let by_age = Sorter::ascending("age", |p: &Person| p.age)
            .with_priority(|_, _| Preference::NoPreference);
        assert_eq!(by_age.evaluate(&a, &b), Preference::Before);
    }

    #[test]
    fn test_builder_attaches_label_and_metadata() {
        let sorter = Sorter::descending("age", |p: &Person| p.age).labeled("oldest_first");
        assert_eq!(sorter.field(), "age");
        assert_eq!(sorter.order(), SortOrder::Descending);
        assert_eq!(sorter.label(), Some("oldest_first"));
    }

    #[test]
    fn test_debug_elides_closures() {
        let sorter = Sorter::ascending("age", |p: &Person| p.age).labeled("by_age");
        let rendered = format!("{:?}", sorter);
        assert!(rendered.contains("by_age"));
        assert!(rendered.contains("has_priority: false"));
    }
}
