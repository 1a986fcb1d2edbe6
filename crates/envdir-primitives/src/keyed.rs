//! Non-empty keyed stores
//!
//! A [`NonEmptyKeyedStore`] holds values that know their own key, the way a
//! platform knows its platform type and a property knows its name. Keys are
//! never supplied separately, so a key can never disagree with its value.

use crate::error::PrimitiveError;
use indexmap::map;
use indexmap::IndexMap;
use std::borrow::Borrow;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

/// Value that derives its own store key
pub trait Keyed {
    /// Key type extracted from the value
    type Key: Eq + Hash + Clone;

    /// Extract the key
    fn key(&self) -> Self::Key;
}

/// Map guaranteed to hold at least one value, keyed by [`Keyed::key`]
///
/// # Invariants
/// - At least one entry
/// - Every entry's key equals `value.key()`
///
/// Iteration follows insertion order, which for decoded stores is the
/// order of the source document. Equality and hashing ignore that order
/// and compare the value sets.
#[derive(Debug, Clone)]
pub struct NonEmptyKeyedStore<K, V> {
    values: IndexMap<K, V>,
}

impl<K, V> NonEmptyKeyedStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Keyed<Key = K>,
{
    /// Create from untrusted input
    ///
    /// # Errors
    /// - `PrimitiveError::EmptyStore` if `values` yields nothing
    /// - `PrimitiveError::DuplicateKey` if two values share a key
    pub fn try_from_values(values: impl IntoIterator<Item = V>) -> Result<Self, PrimitiveError>
    where
        K: Display,
    {
        let mut map = IndexMap::new();
        for value in values {
            let key = value.key();
            if map.contains_key(&key) {
                return Err(PrimitiveError::duplicate_key(key));
            }
            map.insert(key, value);
        }
        if map.is_empty() {
            return Err(PrimitiveError::EmptyStore);
        }
        Ok(Self { values: map })
    }

    /// Store holding exactly one value
    #[must_use]
    pub fn single(value: V) -> Self {
        let mut map = IndexMap::with_capacity(1);
        map.insert(value.key(), value);
        Self { values: map }
    }

    /// Look up a value by key
    #[inline]
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.get(key)
    }

    /// Check if a key is present
    #[inline]
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.values.contains_key(key)
    }

    /// Number of values (always >= 1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for API symmetry with std collections
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First value in iteration order
    #[must_use]
    pub fn first(&self) -> &V {
        match self.values.first() {
            Some((_, value)) => value,
            None => unreachable!("NonEmptyKeyedStore is never empty"),
        }
    }

    /// Keys in iteration order
    #[inline]
    pub fn keys(&self) -> map::Keys<'_, K, V> {
        self.values.keys()
    }

    /// Values in iteration order
    #[inline]
    pub fn values(&self) -> map::Values<'_, K, V> {
        self.values.values()
    }

    /// Key-value pairs in iteration order
    #[inline]
    pub fn iter(&self) -> map::Iter<'_, K, V> {
        self.values.iter()
    }

    /// Consume into values in iteration order
    #[inline]
    pub fn into_values(self) -> map::IntoValues<K, V> {
        self.values.into_values()
    }

    /// Values sorted by key
    ///
    /// Used wherever output must not depend on insertion order.
    #[must_use]
    pub fn sorted_values(&self) -> Vec<&V>
    where
        K: Ord,
    {
        let mut entries: Vec<(&K, &V)> = self.values.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries.into_iter().map(|(_, value)| value).collect()
    }
}

impl<K, V> NonEmptyKeyedStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Keyed<Key = K> + Clone,
{
    /// Right-biased union
    ///
    /// Values from `other` replace same-keyed values from `self`; the result
    /// is re-keyed from the merged values and is non-empty because both
    /// operands are.
    #[must_use]
    pub fn add_values(&self, other: &Self) -> Self {
        let mut merged = self.values.clone();
        for value in other.values.values() {
            merged.insert(value.key(), value.clone());
        }
        Self { values: merged }
    }

    /// Right-biased insert of a single value
    #[must_use]
    pub fn with_value(&self, value: V) -> Self {
        self.add_values(&Self::single(value))
    }
}

impl<'a, K, V> IntoIterator for &'a NonEmptyKeyedStore<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl<K, V> PartialEq for NonEmptyKeyedStore<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        // Keys are derived from values, so equal key-value maps are exactly
        // equal value sets.
        self.values.len() == other.values.len()
            && self
                .values
                .iter()
                .all(|(key, value)| other.values.get(key) == Some(value))
    }
}

impl<K, V> Eq for NonEmptyKeyedStore<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K, V> Hash for NonEmptyKeyedStore<K, V>
where
    K: Eq + Hash + Ord,
    V: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut entries: Vec<(&K, &V)> = self.values.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        state.write_usize(entries.len());
        for (_, value) in entries {
            value.hash(state);
        }
    }
}
