//! Macro for declaring a type's registered sort criteria
//!
//! Generates the [`Sortable`](crate::core::sortable::Sortable) implementation
//! together with the lazily initialized static criteria list.

/// Declare the sort criteria for a record type.
///
/// The criteria list is built once on first use and shared by every sort
/// operation for the lifetime of the process.
///
/// # Example
/// ```rust,ignore
/// use sortable::prelude::*;
///
/// #[derive(Serialize, Deserialize)]
/// struct Invoice {
///     number: String,
///     amount_cents: i64,
///     paid: bool,
/// }
///
/// impl_sortable!(Invoice, [
///     Sorter::ascending("amount_cents", |i: &Invoice| i.amount_cents).labeled("cheapest"),
///     Sorter::descending("amount_cents", |i: &Invoice| i.amount_cents).labeled("priciest"),
///     Sorter::ascending("paid", |i: &Invoice| i.paid),
/// ]);
/// ```
#[macro_export]
macro_rules! impl_sortable {
    ($type:ty, [$($sorter:expr),* $(,)?]) => {
        impl $crate::core::sortable::Sortable for $type {
            fn sorters() -> &'static [$crate::core::sorter::Sorter<Self>] {
                static SORTERS: ::std::sync::LazyLock<
                    Vec<$crate::core::sorter::Sorter<$type>>,
                > = ::std::sync::LazyLock::new(|| vec![$($sorter),*]);
                &SORTERS
            }
        }
    };
}
