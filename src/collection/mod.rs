//! Insertion-ordered collection with list and set conveniences.
//!
//! This module provides [`Collection`], a key-unique mapping that remembers
//! the order in which keys were first inserted and layers positional
//! slicing, random sampling, folding, sorting and set algebra on top.
//!
//! # Overview
//!
//! The collection is backed by a single [`IndexMap`]. Every operation reads
//! or transforms that one map:
//!
//! - Overwriting an existing key keeps its original position.
//! - Removing a key shifts the following entries down, so the remaining
//!   keys keep their relative order.
//! - Only [`sort`](Collection::sort), [`sort_by`](Collection::sort_by) and
//!   the operations producing a new collection (e.g.
//!   [`reverse`](Collection::reverse)) change the iteration order.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity        |
//! |------------------------|-------------------|
//! | `get` / `has` / `set`  | O(1) amortized    |
//! | `unset`                | O(n)              |
//! | `first` / `last`       | O(min(n, count))  |
//! | `key_at`               | O(1)              |
//! | `random_key`           | O(amount)         |
//! | `sort` / `sort_by`     | O(n log n)        |
//! | set algebra            | O(n + m)          |
//!
//! # Concurrency
//!
//! There is no internal locking. Mutating operations take `&mut self`, so
//! sharing a collection across threads requires the caller to provide
//! mutual exclusion (e.g. a `Mutex`).
//!
//! # Examples
//!
//! ```rust
//! use ordmap_collection::collection::Collection;
//!
//! let mut collection = Collection::new();
//! collection.set("a", 1);
//! collection.set("b", 2);
//! collection.set("a", 10);
//!
//! // Overwrites keep the first-insertion position
//! let keys: Vec<&&str> = collection.keys().collect();
//! assert_eq!(keys, vec![&"a", &"b"]);
//! assert_eq!(collection.get("a"), Some(&10));
//!
//! // Missing keys are not errors
//! assert_eq!(collection.get("z"), None);
//! collection.unset("z");
//! assert_eq!(collection.len(), 2);
//! ```

mod algebra;
mod fold;
mod positional;
mod sampling;

pub use fold::BoxedPredicate;
pub use positional::KeySelection;

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Index;

use indexmap::{Equivalent, IndexMap};

use crate::hashing::DefaultHashBuilder;

// =============================================================================
// Collection Definition
// =============================================================================

/// A key-unique, insertion-ordered mapping.
///
/// # Type Parameters
///
/// * `K` - The key type. Lookups require `Hash + Eq`.
/// * `V` - The value type. Unconstrained unless an operation needs more.
/// * `S` - The hash builder, [`DefaultHashBuilder`] unless overridden.
///
/// # Examples
///
/// ```rust
/// use ordmap_collection::collection::Collection;
///
/// let collection: Collection<&str, i32> = [("x", 3), ("y", 1), ("z", 2)].into();
/// assert_eq!(collection.len(), 3);
/// assert!(collection.has_all(["x", "z"].iter()));
/// ```
#[derive(Clone)]
pub struct Collection<K, V, S = DefaultHashBuilder> {
    entries: IndexMap<K, V, S>,
}

static_assertions::assert_impl_all!(Collection<String, i32>: Clone, Default, Send, Sync);

impl<K, V> Collection<K, V> {
    /// Creates a new empty collection using the default hasher.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<String, i32> = Collection::new();
    /// assert!(collection.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates a new empty collection with room for `capacity` entries.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> Collection<K, V, S> {
    /// Creates a new empty collection using `hash_builder` to hash keys.
    #[inline]
    pub const fn with_hasher(hash_builder: S) -> Self {
        Self {
            entries: IndexMap::with_hasher(hash_builder),
        }
    }

    /// Creates a new empty collection with the given capacity and hasher.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, hash_builder),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the collection holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over `(key, value)` pairs in iteration order.
    #[inline]
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in iteration order.
    #[inline]
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in iteration order.
    #[inline]
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Returns the backing mapping for external consumption.
    ///
    /// The mapping iterates in the collection's current order, which makes
    /// it suitable for handing to serialization code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("b", 2), ("a", 1)].into();
    /// let exported: Vec<(&&str, &i32)> = collection.export().iter().collect();
    /// assert_eq!(exported, vec![(&"b", &2), (&"a", &1)]);
    /// ```
    #[inline]
    pub const fn export(&self) -> &IndexMap<K, V, S> {
        &self.entries
    }

    /// Consumes the collection and returns the backing mapping.
    #[inline]
    pub fn into_inner(self) -> IndexMap<K, V, S> {
        self.entries
    }
}

// =============================================================================
// Core Store & Basic Access
// =============================================================================

impl<K, V, S> Collection<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Returns `true` if `key` is present.
    #[inline]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.contains_key(key)
    }

    /// Returns the value stored under `key`, or `None` if it is absent.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.get_mut(key)
    }

    /// Inserts or overwrites the value stored under `key`.
    ///
    /// An existing key keeps its position; a new key is appended. Returns
    /// the previous value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let mut collection = Collection::new();
    /// assert_eq!(collection.set("a", 1), None);
    /// collection.set("b", 2);
    /// assert_eq!(collection.set("a", 3), Some(1));
    /// assert_eq!(collection.key_at(0), Some(&"a"));
    /// ```
    #[inline]
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Removes `key` if present, preserving the order of the remaining keys.
    ///
    /// Removing an absent key is a no-op. Returns the removed value, if any.
    #[inline]
    pub fn unset<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.entries.shift_remove(key)
    }

    /// Returns `true` if every key in `keys` is present.
    ///
    /// An empty collection always answers `false`, even for an empty `keys`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let empty: Collection<&str, i32> = Collection::new();
    /// assert!(!empty.has_all(std::iter::empty::<&&str>()));
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// assert!(collection.has_all(std::iter::empty::<&&str>()));
    /// assert!(collection.has_all([&"a", &"b"]));
    /// assert!(!collection.has_all([&"a", &"c"]));
    /// ```
    pub fn has_all<'q, Q, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'q Q>,
        Q: ?Sized + Hash + Equivalent<K> + 'q,
    {
        if self.is_empty() {
            return false;
        }
        keys.into_iter().all(|key| self.has(key))
    }

    /// Returns `true` if at least one key in `keys` is present.
    ///
    /// An empty collection always answers `false`.
    pub fn has_any<'q, Q, I>(&self, keys: I) -> bool
    where
        I: IntoIterator<Item = &'q Q>,
        Q: ?Sized + Hash + Equivalent<K> + 'q,
    {
        if self.is_empty() {
            return false;
        }
        keys.into_iter().any(|key| self.has(key))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, S: Default> Default for Collection<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> From<IndexMap<K, V, S>> for Collection<K, V, S> {
    fn from(entries: IndexMap<K, V, S>) -> Self {
        Self { entries }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Collection<K, V>
where
    K: Hash + Eq,
{
    fn from(array: [(K, V); N]) -> Self {
        array.into_iter().collect()
    }
}

impl<K, V, S> FromIterator<(K, V)> for Collection<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: IndexMap::from_iter(iter),
        }
    }
}

impl<K, V, S> Extend<(K, V)> for Collection<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<K, V, S> IntoIterator for Collection<K, V, S> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a Collection<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V, Q, S> Index<&Q> for Collection<K, V, S>
where
    K: Hash + Eq,
    Q: ?Sized + Hash + Equivalent<K>,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is absent. Use [`Collection::get`] for a non-panicking lookup.
    fn index(&self, key: &Q) -> &V {
        &self.entries[key]
    }
}

/// Equality is order-sensitive: two collections are equal when they hold
/// the same entries in the same iteration order.
impl<K: PartialEq, V: PartialEq, S> PartialEq for Collection<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, S> Eq for Collection<K, V, S> {}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Collection<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for Collection<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for Collection<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct CollectionVisitor<K, V, S> {
    marker: std::marker::PhantomData<fn() -> Collection<K, V, S>>,
}

#[cfg(feature = "serde")]
impl<K, V, S> CollectionVisitor<K, V, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for CollectionVisitor<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = Collection<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut collection =
            Collection::with_capacity_and_hasher(access.size_hint().unwrap_or(0), S::default());
        while let Some((key, value)) = access.next_entry()? {
            collection.set(key, value);
        }
        Ok(collection)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for Collection<K, V, S>
where
    K: serde::Deserialize<'de> + Hash + Eq,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(CollectionVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> Collection<&'static str, i32> {
        [("a", 1), ("b", 2), ("c", 3)].into()
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_collection() {
        let collection: Collection<i32, String> = Collection::new();
        assert_eq!(format!("{collection}"), "{}");
    }

    #[rstest]
    fn test_display_keeps_insertion_order() {
        let collection: Collection<i32, &str> = [(3, "three"), (1, "one")].into();
        assert_eq!(format!("{collection}"), "{3: three, 1: one}");
    }

    #[rstest]
    fn test_debug_formats_as_map() {
        assert_eq!(format!("{:?}", sample()), r#"{"a": 1, "b": 2, "c": 3}"#);
    }

    // =========================================================================
    // Store Tests
    // =========================================================================

    #[rstest]
    fn test_set_then_get_round_trips() {
        let mut collection = Collection::new();
        collection.set("key".to_string(), 42);
        assert_eq!(collection.get("key"), Some(&42));
        assert!(collection.has("key"));
    }

    #[rstest]
    fn test_unset_then_get_returns_none() {
        let mut collection = sample();
        assert_eq!(collection.unset("b"), Some(2));
        assert_eq!(collection.get("b"), None);
        assert_eq!(
            collection.keys().copied().collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }

    #[rstest]
    fn test_unset_missing_key_is_noop() {
        let mut collection = sample();
        assert_eq!(collection.unset("missing"), None);
        assert_eq!(collection, sample());
    }

    #[rstest]
    fn test_overwrite_keeps_position() {
        let mut collection = sample();
        collection.set("a", 100);
        assert_eq!(
            collection.keys().copied().collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(collection["a"], 100);
    }

    #[rstest]
    #[case(vec![], true)]
    #[case(vec!["a"], true)]
    #[case(vec!["a", "c"], true)]
    #[case(vec!["a", "z"], false)]
    fn test_has_all_on_populated(#[case] keys: Vec<&'static str>, #[case] expected: bool) {
        assert_eq!(sample().has_all(keys.iter()), expected);
    }

    #[rstest]
    #[case(vec![], false)]
    #[case(vec!["z"], false)]
    #[case(vec!["z", "b"], true)]
    fn test_has_any_on_populated(#[case] keys: Vec<&'static str>, #[case] expected: bool) {
        assert_eq!(sample().has_any(keys.iter()), expected);
    }

    #[rstest]
    fn test_empty_collection_has_neither_all_nor_any() {
        let collection: Collection<&str, i32> = Collection::new();
        let keys: Vec<&str> = Vec::new();
        assert!(!collection.has_all(keys.iter()));
        assert!(!collection.has_any(keys.iter()));
    }

    #[rstest]
    fn test_equality_is_order_sensitive() {
        let forward: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
        let backward: Collection<&str, i32> = [("b", 2), ("a", 1)].into();
        assert_ne!(forward, backward);
        assert_eq!(forward, forward.clone());
    }

    #[rstest]
    fn test_export_exposes_backing_map_in_order() {
        let collection = sample();
        let exported: Vec<(&&str, &i32)> = collection.export().iter().collect();
        assert_eq!(exported, vec![(&"a", &1), (&"b", &2), (&"c", &3)]);
        assert_eq!(collection.clone().into_inner().len(), 3);
    }

    #[rstest]
    fn test_with_capacity_preallocates_empty_collection() {
        let collection: Collection<String, i32> = Collection::with_capacity(16);
        assert!(collection.is_empty());
        assert!(collection.export().capacity() >= 16);
    }

    #[rstest]
    fn test_clear_empties_collection() {
        let mut collection = sample();
        collection.clear();
        assert!(collection.is_empty());
    }
}
