//! Set algebra over keys, with values carried along.
//!
//! Every operation here builds a new collection and copies the selected
//! values into it. The one exception to leaving the operands untouched is
//! [`Collection::symmetric_difference`], which removes the shared keys from
//! its argument. Use [`Collection::symmetric_difference_retaining`] when the
//! argument is still needed afterwards.

use std::hash::{BuildHasher, Hash};

use super::Collection;

impl<K, V, S> Collection<K, V, S>
where
    K: Clone + Hash + Eq,
    V: Clone,
    S: Clone + BuildHasher,
{
    /// Returns the entries present in both collections with equal values.
    ///
    /// Order and values follow `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let left: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let right: Collection<&str, i32> = [("b", 2), ("c", 3)].into();
    /// let expected: Collection<&str, i32> = [("b", 2)].into();
    /// assert_eq!(left.intersection(&right), expected);
    /// ```
    #[must_use]
    pub fn intersection<S2>(&self, other: &Collection<K, V, S2>) -> Self
    where
        V: PartialEq,
        S2: BuildHasher,
    {
        self.select(|key, value| other.get(key) == Some(value))
    }

    /// Returns the entries of `self` whose keys are absent from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let left: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let right: Collection<&str, i32> = [("b", 2)].into();
    /// let expected: Collection<&str, i32> = [("a", 1)].into();
    /// assert_eq!(left.difference(&right), expected);
    /// ```
    #[must_use]
    pub fn difference<S2>(&self, other: &Collection<K, V, S2>) -> Self
    where
        S2: BuildHasher,
    {
        self.select(|key, _| !other.has(key))
    }

    /// Returns the entries whose keys belong to exactly one of the two
    /// collections, removing the shared keys from `other`.
    ///
    /// The result lists the exclusive entries of `self` first, then the
    /// entries left in `other`, each in its own order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let left: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let mut right: Collection<&str, i32> = [("b", 2), ("c", 3)].into();
    ///
    /// let expected: Collection<&str, i32> = [("a", 1), ("c", 3)].into();
    /// assert_eq!(left.symmetric_difference(&mut right), expected);
    /// assert!(!right.has("b"));
    /// ```
    #[must_use]
    pub fn symmetric_difference<S2>(&self, other: &mut Collection<K, V, S2>) -> Self
    where
        S2: BuildHasher,
    {
        let mut result = self.difference(&*other);
        let before = other.len();
        other.entries.retain(|key, _| !self.has(key));
        log::trace!(
            "symmetric difference removed {} shared keys from its argument",
            before - other.len()
        );
        result.extend(
            other
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        result
    }

    /// Same result as [`symmetric_difference`](Self::symmetric_difference),
    /// leaving `other` untouched.
    #[must_use]
    pub fn symmetric_difference_retaining<S2>(&self, other: &Collection<K, V, S2>) -> Self
    where
        S2: BuildHasher,
    {
        let mut result = self.difference(other);
        result.extend(
            other
                .iter()
                .filter(|(key, _)| !self.has(*key))
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        result
    }

    /// Returns a copy of the collection with the iteration order reversed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordmap_collection::collection::Collection;
    ///
    /// let collection: Collection<&str, i32> = [("a", 1), ("b", 2)].into();
    /// let reversed = collection.reverse();
    /// assert_eq!(reversed.key_at(0), Some(&"b"));
    /// assert_eq!(collection.key_at(0), Some(&"a"));
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut entries = self.entries.clone();
        entries.reverse();
        Self { entries }
    }

    fn select<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&K, &V) -> bool,
    {
        let mut selected = Self::with_hasher(self.entries.hasher().clone());
        for (key, value) in self.iter().filter(|&(key, value)| keep(key, value)) {
            selected.set(key.clone(), value.clone());
        }
        log::trace!("selected {} of {} entries", selected.len(), self.len());
        selected
    }
}
