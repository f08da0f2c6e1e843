//! Key/value-shaped payloads.

use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet, HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::Outcome;

/// Lookup helpers for outcomes wrapping a map.
///
/// Implemented for [`HashMap`] and [`BTreeMap`]; [`OutcomeMapExt::keys`]
/// yields the matching set type.
pub trait OutcomeMapExt<K, V> {
    /// Set type returned by [`OutcomeMapExt::keys`].
    type Keys;

    /// The value stored under `key`, or `Success(None)` when it is absent.
    fn get_value<Q>(self, key: &Q) -> Outcome<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized;

    /// Whether `key` is present.
    fn contains_key<Q>(self, key: &Q) -> Outcome<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized;

    /// Whether any entry holds `value`.
    fn contains_value(self, value: &V) -> Outcome<bool>
    where
        V: PartialEq;

    /// All keys.
    fn keys(self) -> Outcome<Self::Keys>;

    /// All values, in the map's iteration order.
    fn values(self) -> Outcome<Vec<V>>;
}

impl<K, V, S> OutcomeMapExt<K, V> for Outcome<HashMap<K, V, S>>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    type Keys = HashSet<K, S>;

    fn get_value<Q>(self, key: &Q) -> Outcome<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.map(|mut entries| entries.remove(key))
    }

    fn contains_key<Q>(self, key: &Q) -> Outcome<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.map(|entries| entries.contains_key(key))
    }

    fn contains_value(self, value: &V) -> Outcome<bool>
    where
        V: PartialEq,
    {
        self.map(|entries| entries.values().any(|candidate| candidate == value))
    }

    fn keys(self) -> Outcome<Self::Keys> {
        self.map(|entries| entries.into_keys().collect())
    }

    fn values(self) -> Outcome<Vec<V>> {
        self.map(|entries| entries.into_values().collect())
    }
}

impl<K, V> OutcomeMapExt<K, V> for Outcome<BTreeMap<K, V>>
where
    K: Ord,
{
    type Keys = BTreeSet<K>;

    fn get_value<Q>(self, key: &Q) -> Outcome<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.map(|mut entries| entries.remove(key))
    }

    fn contains_key<Q>(self, key: &Q) -> Outcome<bool>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        self.map(|entries| entries.contains_key(key))
    }

    fn contains_value(self, value: &V) -> Outcome<bool>
    where
        V: PartialEq,
    {
        self.map(|entries| entries.values().any(|candidate| candidate == value))
    }

    fn keys(self) -> Outcome<Self::Keys> {
        self.map(|entries| entries.into_keys().collect())
    }

    fn values(self) -> Outcome<Vec<V>> {
        self.map(|entries| entries.into_values().collect())
    }
}
