//! Non-empty ordered sets

use crate::error::PrimitiveError;
use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// Ordered set guaranteed to contain at least one element
///
/// Iteration follows the element's `Ord` order, so two equal sets always
/// encode to the same bytes. Operations whose result may be empty return
/// `Option` rather than an empty `NonEmptySet`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptySet<T>(BTreeSet<T>);

impl<T: Ord> NonEmptySet<T> {
    /// Create from untrusted input, collapsing duplicates
    ///
    /// # Errors
    /// Returns `PrimitiveError::EmptySet` if `values` yields nothing
    pub fn try_from_iter(values: impl IntoIterator<Item = T>) -> Result<Self, PrimitiveError> {
        let set: BTreeSet<T> = values.into_iter().collect();
        if set.is_empty() {
            return Err(PrimitiveError::EmptySet);
        }
        Ok(Self(set))
    }

    /// Create without checking
    ///
    /// Reserved for sets assembled from constants.
    #[inline]
    #[must_use]
    pub fn new_unchecked(set: BTreeSet<T>) -> Self {
        debug_assert!(!set.is_empty(), "NonEmptySet::new_unchecked on empty set");
        Self(set)
    }

    /// Set with exactly one element
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self(BTreeSet::from([value]))
    }

    /// Number of elements (always >= 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with std collections
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Smallest element
    #[must_use]
    pub fn first(&self) -> &T {
        match self.0.first() {
            Some(value) => value,
            None => unreachable!("NonEmptySet is never empty"),
        }
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    /// Check if every element is also in `other`
    #[inline]
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Iterate in ascending order
    #[inline]
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.0.iter()
    }

    /// Borrow the underlying set
    #[inline]
    #[must_use]
    pub fn as_set(&self) -> &BTreeSet<T> {
        &self.0
    }

    /// Unwrap into the underlying set
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> BTreeSet<T> {
        self.0
    }
}

impl<T: Ord + Clone> NonEmptySet<T> {
    /// Union of both sets; never empty
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Elements of `self` not in `other`, if any remain
    #[must_use]
    pub fn difference(&self, other: &Self) -> Option<Self> {
        Self::try_from_iter(self.0.difference(&other.0).cloned()).ok()
    }

    /// Elements present in both sets, if any
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Self::try_from_iter(self.0.intersection(&other.0).cloned()).ok()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptySet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> IntoIterator for NonEmptySet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<T: Display> Display for NonEmptySet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T: Serialize> Serialize for NonEmptySet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.0)
    }
}

impl<'de, T> Deserialize<'de> for NonEmptySet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        Self::try_from_iter(values).map_err(de::Error::custom)
    }
}
