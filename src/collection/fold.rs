//! Bulk predicates, folding and in-place sorting.

use std::cmp::Ordering;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

use super::Collection;
use crate::error::CollectionError;
use crate::hashing::DefaultHashBuilder;

/// A boxed predicate over `(value, key, backing map)`.
///
/// Useful when predicates are chosen at runtime, e.g. looked up by name,
/// and handed to [`Collection::try_every`].
#[allow(clippy::type_complexity)]
pub type BoxedPredicate<'a, K, V, S = DefaultHashBuilder> =
    Box<dyn FnMut(&V, &K, &IndexMap<K, V, S>) -> bool + 'a>;

impl<K, V, S> Collection<K, V, S> {
    /// Returns `true` if `predicate` holds for every entry.
    ///
    /// The predicate receives the value, the key and the backing map.
    /// Evaluation stops at the first entry that fails. An empty collection
    /// answers `true`. Any context the predicate needs is captured by the
    /// closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 2), ("b", 4)].into();
    /// let divisor = 2;
    /// assert!(collection.every(|value, _, _| value % divisor == 0));
    /// assert!(!collection.every(|_, key, _| *key == "a"));
    /// ```
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&V, &K, &IndexMap<K, V, S>) -> bool,
    {
        self.entries
            .iter()
            .all(|(key, value)| predicate(value, key, &self.entries))
    }

    /// Like [`every`](Self::every), for predicates that may be missing.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] when `predicate` is
    /// `None`. No entry is visited in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::{BoxedPredicate, Collection};
    /// use ordmap_collection::error::CollectionError;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1)].into();
    /// let missing: Option<BoxedPredicate<&str, i32>> = None;
    /// assert!(matches!(
    ///     collection.try_every(missing),
    ///     Err(CollectionError::InvalidArgument { .. })
    /// ));
    /// ```
    pub fn try_every<F>(&self, predicate: Option<F>) -> Result<bool, CollectionError>
    where
        F: FnMut(&V, &K, &IndexMap<K, V, S>) -> bool,
    {
        let Some(predicate) = predicate else {
            log::debug!("every rejected a missing predicate");
            return Err(CollectionError::not_callable("every"));
        };
        Ok(self.every(predicate))
    }

    /// Left fold over the entries in iteration order.
    ///
    /// `function` receives the running accumulator, the value, the key and
    /// the collection itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let joined = collection.fold(String::new(), |mut acc, value, key, _| {
    ///     acc.push_str(&format!("{key}={value};"));
    ///     acc
    /// });
    /// assert_eq!(joined, "a=1;b=2;");
    /// ```
    pub fn fold<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(B, &V, &K, &Self) -> B,
    {
        self.entries
            .iter()
            .fold(initial, |accumulator, (key, value)| {
                function(accumulator, value, key, self)
            })
    }

    /// Left fold starting from `B::default()`, i.e. `0` for numbers.
    ///
    /// Pass an explicit identity through [`fold`](Self::fold) when the
    /// default is not the right starting point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into();
    /// let total: i32 = collection.reduce(|acc, value, _, _| acc + value);
    /// assert_eq!(total, 6);
    /// ```
    pub fn reduce<B, F>(&self, function: F) -> B
    where
        B: Default,
        F: FnMut(B, &V, &K, &Self) -> B,
    {
        self.fold(B::default(), function)
    }
}

impl<K, V, S> Collection<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Sorts the entries by value in ascending order, in place.
    ///
    /// Keys travel with their values and equal values keep their relative
    /// order. Returns the reordered backing map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let mut collection: Collection<&str, i32> = [("x", 3), ("y", 1), ("z", 2)].into();
    /// let sorted: Vec<&&str> = collection.sort().keys().collect();
    /// assert_eq!(sorted, vec![&"y", &"z", &"x"]);
    /// ```
    pub fn sort(&mut self) -> &IndexMap<K, V, S>
    where
        V: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// Sorts the entries by value with `compare`, in place.
    ///
    /// The sort is stable. Values without a total order (e.g. floats) can
    /// be sorted with `|a, b| a.total_cmp(b)`.
    pub fn sort_by<F>(&mut self, mut compare: F) -> &IndexMap<K, V, S>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        log::trace!("sorting {} entries by value", self.len());
        self.entries
            .sort_by(|_, left, _, right| compare(left, right));
        &self.entries
    }
}
