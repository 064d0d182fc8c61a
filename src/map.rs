//! Ordered occurrence counts.
//!
//! This module provides [`FrequencyMap`], a wrapper around [`IndexMap`] that maps each
//! distinct key to the number of times it was seen.
//!
//! ## Why IndexMap?
//!
//! Counting results are compared and printed far more often than they are looked up, so
//! the map keeps keys in first-seen order:
//!
//! - **Deterministic output**: Serialized counts come out in a stable order
//! - **Stable ties**: [`FrequencyMap::most_common`] and [`FrequencyMap::into_sorted`]
//!   break ties by first appearance
//!
//! Equality ignores order; two maps are equal when they hold the same counts.
//!
//! ## Examples
//!
//! ```rust
//! use seq_drills::FrequencyMap;
//!
//! let counts: FrequencyMap<&str> = ["apple", "pear", "apple"].into_iter().collect();
//!
//! assert_eq!(counts.len(), 2);
//! assert_eq!(counts.count("apple"), 2);
//! assert_eq!(counts.count("plum"), 0);
//! ```

use indexmap::{Equivalent, IndexMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

/// A count-per-key table that remembers first-insertion order.
///
/// # Examples
///
/// ```rust
/// use seq_drills::FrequencyMap;
///
/// let mut map = FrequencyMap::new();
/// map.increment('b');
/// map.increment('a');
/// map.increment('b');
///
/// // Iteration maintains first-seen order
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, vec!['b', 'a']);
/// ```
#[derive(Debug, Clone)]
pub struct FrequencyMap<K>(IndexMap<K, usize>);

impl<K> FrequencyMap<K>
where
    K: Hash + Eq,
{
    /// Creates an empty `FrequencyMap`.
    #[must_use]
    pub fn new() -> Self {
        FrequencyMap(IndexMap::new())
    }

    /// Creates an empty `FrequencyMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FrequencyMap(IndexMap::with_capacity(capacity))
    }

    /// Adds one occurrence of `key` and returns its new count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq_drills::FrequencyMap;
    ///
    /// let mut map = FrequencyMap::new();
    /// assert_eq!(map.increment("x"), 1);
    /// assert_eq!(map.increment("x"), 2);
    /// ```
    pub fn increment(&mut self, key: K) -> usize {
        self.add(key, 1)
    }

    /// Adds `n` occurrences of `key` and returns its new count.
    ///
    /// Adding zero still registers the key, which is how a counter reports
    /// categories that were checked but never seen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq_drills::FrequencyMap;
    ///
    /// let mut map = FrequencyMap::new();
    /// map.add("seen", 3);
    /// map.add("unseen", 0);
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("unseen"), Some(0));
    /// ```
    pub fn add(&mut self, key: K, n: usize) -> usize {
        let slot = self.0.entry(key).or_insert(0);
        *slot += n;
        *slot
    }

    /// Returns the count for `key`, or `0` when it was never added.
    #[must_use]
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Returns the count for `key` if it is present in the map.
    ///
    /// Unlike [`FrequencyMap::count`] this tells a zero count apart from an absent key.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.0.get(key).copied()
    }

    /// Returns `true` if `key` is present, even with a zero count.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.0.contains_key(key)
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sum of all counts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq_drills::FrequencyMap;
    ///
    /// let map: FrequencyMap<i32> = [1, 1, 2, 3, 3, 3].into_iter().collect();
    /// assert_eq!(map.total(), 6);
    /// ```
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Returns the key with the highest count; ties go to the key seen first.
    ///
    /// Returns `None` for an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seq_drills::FrequencyMap;
    ///
    /// let map: FrequencyMap<char> = "abba".chars().collect();
    /// assert_eq!(map.most_common(), Some((&'a', 2)));
    /// ```
    #[must_use]
    pub fn most_common(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (key, &n) in &self.0 {
            match best {
                Some((_, top)) if n <= top => {}
                _ => best = Some((key, n)),
            }
        }
        best
    }

    /// Consumes the map and returns its entries by descending count.
    ///
    /// Entries with equal counts keep their first-seen order.
    #[must_use]
    pub fn into_sorted(self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize)> = self.0.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    /// Returns an iterator over the keys of the map, in first-seen order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, usize> {
        self.0.keys()
    }

    /// Returns an iterator over the counts of the map, in first-seen order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, usize> {
        self.0.values()
    }

    /// Returns an iterator over the key-count pairs of the map, in first-seen order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, usize> {
        self.0.iter()
    }
}

impl<K> Default for FrequencyMap<K>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> PartialEq for FrequencyMap<K>
where
    K: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K> Eq for FrequencyMap<K> where K: Hash + Eq {}

impl<K> From<HashMap<K, usize>> for FrequencyMap<K>
where
    K: Hash + Eq,
{
    fn from(map: HashMap<K, usize>) -> Self {
        FrequencyMap(map.into_iter().collect())
    }
}

impl<K> From<FrequencyMap<K>> for HashMap<K, usize>
where
    K: Hash + Eq,
{
    fn from(map: FrequencyMap<K>) -> Self {
        map.0.into_iter().collect()
    }
}

impl<K> IntoIterator for FrequencyMap<K> {
    type Item = (K, usize);
    type IntoIter = indexmap::map::IntoIter<K, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a FrequencyMap<K> {
    type Item = (&'a K, &'a usize);
    type IntoIter = indexmap::map::Iter<'a, K, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K> Extend<K> for FrequencyMap<K>
where
    K: Hash + Eq,
{
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.increment(key);
        }
    }
}

/// Tallies every item of the iterator.
impl<K> FromIterator<K> for FrequencyMap<K>
where
    K: Hash + Eq,
{
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut map = FrequencyMap::new();
        map.extend(iter);
        map
    }
}

impl<K> Serialize for FrequencyMap<K>
where
    K: Serialize + Hash + Eq,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de, K> Deserialize<'de> for FrequencyMap<K>
where
    K: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::deserialize(deserializer).map(FrequencyMap)
    }
}
