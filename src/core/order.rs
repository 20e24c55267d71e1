//! Sort direction and three-valued comparison results

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction applied by a sort criterion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Smallest values first
    #[default]
    Ascending,
    /// Largest values first
    Descending,
}

/// Outcome of comparing two values under one sort rule.
///
/// A rule either places the first value before the second, after it, or
/// declines to distinguish the pair. `NoPreference` is what lets a chain of
/// rules work: an indecisive priority comparator falls through to the field
/// comparison, and an indecisive field comparison leaves the tie to the
/// underlying sort algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    /// The first value sorts before the second
    Before,
    /// The first value does not sort before the second
    After,
    /// The rule cannot distinguish the two values
    NoPreference,
}

impl Preference {
    /// Whether this result actually orders the pair
    pub fn is_decisive(self) -> bool {
        !matches!(self, Preference::NoPreference)
    }

    /// Keep a decisive result, otherwise consult a fallback rule
    pub fn or_else(self, fallback: impl FnOnce() -> Preference) -> Preference {
        if self.is_decisive() { self } else { fallback() }
    }

    /// Lower this result into a [`std::cmp::Ordering`] for use with the
    /// standard sort. `NoPreference` becomes `Equal`: the pair is tied and
    /// the sort algorithm decides their final relative order.
    pub fn into_ordering(self) -> Ordering {
        match self {
            Preference::Before => Ordering::Less,
            Preference::After => Ordering::Greater,
            Preference::NoPreference => Ordering::Equal,
        }
    }
}

/// Compare two values of any totally ordered type under the given direction.
///
/// Equal values yield [`Preference::NoPreference`] regardless of direction.
/// Under [`SortOrder::Ascending`], `Before` means strictly less-than; under
/// [`SortOrder::Descending`] the less-than test runs with its arguments
/// swapped.
///
/// Booleans order `false < true` (the standard `Ord` for `bool`).
pub fn prefer<T: Ord>(a: &T, b: &T, order: SortOrder) -> Preference {
    let ordering = match order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => b.cmp(a),
    };

    match ordering {
        Ordering::Equal => Preference::NoPreference,
        Ordering::Less => Preference::Before,
        Ordering::Greater => Preference::After,
    }
}

/// Comparison for enumerations backed by a comparable raw representation.
///
/// Types whose ordering is defined by an underlying raw value (a discriminant,
/// a numeric code) implement this instead of `Ord` and compare via
/// [`RawOrdered::prefer_raw`].
pub trait RawOrdered {
    /// The comparable representation backing this type
    type Raw: Ord;

    /// Extract the raw representation
    fn raw_value(&self) -> Self::Raw;

    /// Compare two values by their raw representations
    fn prefer_raw(&self, other: &Self, order: SortOrder) -> Preference {
        prefer(&self.raw_value(), &other.raw_value(), order)
    }
}
